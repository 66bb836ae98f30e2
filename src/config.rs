//! Configuration Module
//!
//! Handles loading the store connection settings from environment variables.

use std::env;
use std::time::Duration;

/// Default Redis connection URL.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

/// Default connection timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 5;

/// Store connection parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379/)
    /// - `REDIS_CONNECT_TIMEOUT` - Connection timeout in seconds (default: 5,
    ///   also used when set to 0)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
            connect_timeout: env::var("REDIS_CONNECT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        }
    }

    /// Returns the connection timeout as a Duration.
    ///
    /// A zero timeout is not accepted by the client, so 0 means the default.
    pub fn connect_timeout(&self) -> Duration {
        match self.connect_timeout {
            0 => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            secs => Duration::from_secs(secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(config.connect_timeout, 5);
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("REDIS_URL");
        env::remove_var("REDIS_CONNECT_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(config.connect_timeout, 5);
    }

    #[test]
    fn test_config_zero_timeout_uses_default() {
        env::set_var("REDIS_CONNECT_TIMEOUT", "0");
        let config = Config::from_env();
        env::remove_var("REDIS_CONNECT_TIMEOUT");
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);

        let config = Config {
            connect_timeout: 0,
            ..Config::default()
        };
        assert_eq!(config.connect_timeout(), Duration::from_secs(DEFAULT_CONNECT_TIMEOUT));
    }
}
