//! Instrumented Cache - A key-value backed value cache with call recording
//!
//! Stores scalar values under generated keys, counts and records every
//! store call, and replays the recorded history.

pub mod cache;
pub mod config;
pub mod documents;
pub mod error;
pub mod replay;
pub mod store;

pub use cache::{Cache, Key, StoredValue, STORE_IDENTITY};
pub use config::Config;
pub use error::{CacheError, Result};
pub use replay::{load_replay, replay, replay_to, Replay};
pub use store::{KeyValueStore, MemoryStore, RedisStore};
