//! Store Module
//!
//! The key-value capability consumed by the cache, with a Redis-backed
//! implementation and an in-process one.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use crate::error::{CacheError, Result};

// == Public Constants ==
/// Largest string value Redis accepts, in bytes
pub const MAX_VALUE_SIZE: usize = 512 * 1024 * 1024;

// == Size Check ==
/// Rejects payloads larger than `limit` bytes with a capacity error.
pub(crate) fn check_value_size(value: &[u8], limit: usize) -> Result<()> {
    if value.len() > limit {
        return Err(CacheError::Capacity(format!(
            "Value exceeds maximum size of {} bytes",
            limit
        )));
    }
    Ok(())
}

// == Key Value Store ==
/// Blocking key-value primitives the cache is built on.
///
/// List ranges are inclusive on both ends and accept negative indices
/// counting back from the tail, so `lrange(key, 0, -1)` reads a whole list.
pub trait KeyValueStore {
    /// Stores `value` under `key`, replacing whatever was there.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the bytes under `key`, or `None` when the key is absent.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Atomically increments the integer under `key` and returns the new value.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key` and returns the new length.
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns the elements of the list under `key` between `start` and `stop`.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Removes every key from the current database.
    fn flushdb(&mut self) -> Result<()>;
}
