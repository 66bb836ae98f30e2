//! Error types for the instrumented cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache, its stores and the replay tool.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store could not be reached or the connection dropped
    #[error("Connection error: {0}")]
    Connection(String),

    /// Payload rejected by the store for being too large
    #[error("Store capacity exceeded: {0}")]
    Capacity(String),

    /// Operation against a key holding the wrong kind of value
    #[error("WRONGTYPE operation against key holding the wrong kind of value: {0}")]
    WrongType(String),

    /// Increment of a value that is not a base-10 integer
    #[error("Value is not an integer: {0}")]
    NotAnInteger(String),

    /// Stored bytes are not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// No counter has been recorded for the method identity
    #[error("No call history recorded for {0}")]
    NoHistory(String),

    /// Call arguments could not be serialized into a history entry
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transcript output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other command failure reported by the store
    #[error("Command failed: {0}")]
    Command(String),
}

// == Redis Error Conversion ==
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal()
            || err.is_io_error()
            || err.is_timeout()
            || err.is_connection_dropped()
        {
            CacheError::Connection(err.to_string())
        } else if err.to_string().contains("maximum allowed size") {
            CacheError::Capacity(err.to_string())
        } else {
            CacheError::Command(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_refusal_maps_to_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: CacheError = redis::RedisError::from(io).into();
        assert!(matches!(err, CacheError::Connection(_)));
    }

    #[test]
    fn test_response_error_maps_to_command() {
        let redis_err = redis::RedisError::from((redis::ErrorKind::ResponseError, "ERR unknown"));
        let err: CacheError = redis_err.into();
        assert!(matches!(err, CacheError::Command(_)));
    }

    #[test]
    fn test_oversize_reply_maps_to_capacity() {
        let redis_err = redis::RedisError::from((
            redis::ErrorKind::ResponseError,
            "ERR string exceeds maximum allowed size",
        ));
        let err: CacheError = redis_err.into();
        assert!(matches!(err, CacheError::Capacity(_)));
    }

    #[test]
    fn test_decode_error_from_utf8() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: CacheError = utf8.into();
        assert!(err.to_string().starts_with("Decode error"));
    }
}
