//! Memory Store Module
//!
//! In-process key-value store with Redis string, counter and list semantics.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::{check_value_size, KeyValueStore, MAX_VALUE_SIZE};

// == Stored Entry ==
/// A value held under a single key.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Bytes(Vec<u8>),
    List(Vec<Vec<u8>>),
}

// == Memory Store ==
/// HashMap-backed store sharing one keyspace between strings and lists.
#[derive(Debug)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, Entry>,
    /// Maximum size of a single payload in bytes
    max_value_size: usize,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store with the Redis payload limit.
    pub fn new() -> Self {
        Self::with_max_value_size(MAX_VALUE_SIZE)
    }

    /// Creates an empty store rejecting payloads larger than `max_value_size`.
    pub fn with_max_value_size(max_value_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_value_size,
        }
    }

    // == Length ==
    /// Returns the current number of keys in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_size(&self, value: &[u8]) -> Result<()> {
        check_value_size(value, self.max_value_size)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    // == Set ==
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.check_size(value)?;
        self.entries
            .insert(key.to_string(), Entry::Bytes(value.to_vec()));
        Ok(())
    }

    // == Get ==
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.entries.get(key) {
            Some(Entry::Bytes(value)) => Ok(Some(value.clone())),
            Some(Entry::List(_)) => Err(CacheError::WrongType(key.to_string())),
            None => Ok(None),
        }
    }

    // == Increment ==
    fn incr(&mut self, key: &str) -> Result<i64> {
        let current = match self.entries.get(key) {
            Some(Entry::Bytes(value)) => std::str::from_utf8(value)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| CacheError::NotAnInteger(key.to_string()))?,
            Some(Entry::List(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => 0,
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::NotAnInteger(key.to_string()))?;
        self.entries
            .insert(key.to_string(), Entry::Bytes(next.to_string().into_bytes()));
        Ok(next)
    }

    // == Right Push ==
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        self.check_size(value)?;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::List(Vec::new()));

        match entry {
            Entry::List(items) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Entry::Bytes(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    // == List Range ==
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let items = match self.entries.get(key) {
            Some(Entry::List(items)) => items,
            Some(Entry::Bytes(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => return Ok(Vec::new()),
        };

        Ok(match normalize_range(items.len(), start, stop) {
            Some((from, to)) => items[from..=to].to_vec(),
            None => Vec::new(),
        })
    }

    // == Flush ==
    fn flushdb(&mut self) -> Result<()> {
        debug!("Flushing {} keys from memory store", self.entries.len());
        self.entries.clear();
        Ok(())
    }
}

// == Utility Functions ==
/// Resolves an inclusive, possibly negative index range against a list length.
///
/// Returns `None` when the range selects nothing.
fn normalize_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}
