//! # Redis Store
//!
//! Synchronous Redis connection implementing the key-value capability.

use redis::{Client, Commands, Connection};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::store::{check_value_size, KeyValueStore, MAX_VALUE_SIZE};

/// A blocking connection to a Redis server.
pub struct RedisStore {
    /// The open connection every command is issued on.
    conn: Connection,
    /// Payloads above this size are rejected before they reach the server,
    /// which would otherwise drop the connection on a bulk length error.
    max_value_size: usize,
}

impl RedisStore {
    /// Opens a connection using the configured URL and timeout.
    ///
    /// Fails with [`CacheError::Connection`](crate::error::CacheError::Connection)
    /// when the server cannot be reached.
    pub fn connect(config: &Config) -> Result<Self> {
        let client = Client::open(config.redis_url.as_str())?;
        let conn = client.get_connection_with_timeout(config.connect_timeout())?;
        info!("Connected to Redis at {}", config.redis_url);
        Ok(Self {
            conn,
            max_value_size: MAX_VALUE_SIZE,
        })
    }

    /// Lowers the payload limit below the server's default.
    pub fn with_max_value_size(mut self, max_value_size: usize) -> Self {
        self.max_value_size = max_value_size;
        self
    }
}

impl KeyValueStore for RedisStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        check_value_size(value, self.max_value_size)?;
        let _: () = self.conn.set(key, value)?;
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.conn.get(key)?)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        Ok(self.conn.incr(key, 1)?)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        check_value_size(value, self.max_value_size)?;
        Ok(self.conn.rpush(key, value)?)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        Ok(self.conn.lrange(key, start, stop)?)
    }

    fn flushdb(&mut self) -> Result<()> {
        // Commands has no FLUSHDB helper
        redis::cmd("FLUSHDB").query::<()>(&mut self.conn)?;
        debug!("Flushed Redis database");
        Ok(())
    }
}
