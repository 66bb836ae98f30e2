//! Instrumented Cache Module
//!
//! Stores scalar values under generated keys, recording call counts and
//! history for every store.

use tracing::{debug, info, warn};

use crate::cache::history::{record_call, CallHistory};
use crate::cache::{Key, StoredValue, STORE_IDENTITY};
use crate::error::Result;
use crate::store::KeyValueStore;

// == Cache ==
/// Value cache over a [`KeyValueStore`].
#[derive(Debug)]
pub struct Cache<S: KeyValueStore> {
    /// Backing store
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    // == Constructor ==
    /// Takes ownership of `store` and clears every key in it.
    pub fn initialize(mut store: S) -> Result<Self> {
        store.flushdb()?;
        info!("Cache initialized on a flushed store");
        Ok(Self { store })
    }

    // == Store ==
    /// Persists `value` under a freshly generated key and returns the key.
    ///
    /// Each call bumps the `Cache.store` counter and appends one entry to
    /// both of its history lists.
    pub fn store(&mut self, value: impl Into<StoredValue>) -> Result<Key> {
        let value = value.into();
        record_call(&mut self.store, STORE_IDENTITY, &[&value], |store| {
            let key = Key::generate();
            store.set(key.as_str(), &value.to_bytes())?;
            debug!("Stored value under {}", key);
            Ok(key)
        })
    }

    // == Get ==
    /// Returns the raw bytes under `key`, or `None` if it is absent.
    pub fn get(&mut self, key: impl AsRef<str>) -> Result<Option<Vec<u8>>> {
        self.store.get(key.as_ref())
    }

    /// Fetches the raw value under `key` and hands it to `transform`.
    ///
    /// `transform` also sees absent keys as `None`. Fallible conversions
    /// return their own `Result` for the caller to handle.
    pub fn get_with<T, F>(&mut self, key: impl AsRef<str>, transform: F) -> Result<T>
    where
        F: FnOnce(Option<Vec<u8>>) -> T,
    {
        let raw = self.get(key)?;
        Ok(transform(raw))
    }

    // == Get String ==
    /// Returns the value under `key` decoded as UTF-8, or `""` if absent.
    pub fn get_string(&mut self, key: impl AsRef<str>) -> Result<String> {
        let raw = self.get(key)?.unwrap_or_default();
        Ok(String::from_utf8(raw)?)
    }

    // == Get Int ==
    /// Returns the value under `key` parsed as a base-10 integer.
    ///
    /// Surrounding whitespace is ignored. Missing keys, invalid UTF-8 and
    /// non-numeric text all yield `0`.
    /// Store errors are still returned.
    pub fn get_int(&mut self, key: impl AsRef<str>) -> Result<i64> {
        let key = key.as_ref();
        let parsed = self
            .get(key)?
            .and_then(|raw| String::from_utf8(raw).ok())
            .and_then(|text| text.trim().parse::<i64>().ok());

        Ok(parsed.unwrap_or_else(|| {
            warn!("No integer under {}, defaulting to 0", key);
            0
        }))
    }

    // == Instrumentation ==
    /// Returns how many times the method `identity` was called.
    pub fn call_count(&mut self, identity: &str) -> Result<i64> {
        self.get_int(identity)
    }

    /// Returns the recorded call history of the method `identity`.
    pub fn history(&mut self, identity: &str) -> Result<CallHistory> {
        CallHistory::load(&mut self.store, identity)
    }

    // == Backend Access ==
    /// Returns the wrapped store.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the cache, returning the wrapped store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
