//! Replay Module
//!
//! Prints the recorded call history of an instrumented method.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::cache::CallHistory;
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

// == Replay ==
/// Decoded transcript of one method's recorded calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// Method identity the history was recorded under
    pub identity: String,
    /// Call counter as stored
    pub count: String,
    /// `(input, output)` pairs in invocation order
    pub calls: Vec<(String, String)>,
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.identity, self.count)?;
        for (input, output) in &self.calls {
            writeln!(f, "{}(*{}) -> {}", self.identity, input, output)?;
        }
        Ok(())
    }
}

// == Load Replay ==
/// Reads the counter and history lists recorded for `identity`.
///
/// Fails with [`CacheError::NoHistory`] when no counter exists. Input and
/// output lists of different lengths are paired up to the shorter one.
pub fn load_replay<S: KeyValueStore>(store: &mut S, identity: &str) -> Result<Replay> {
    let count = store
        .get(identity)?
        .ok_or_else(|| CacheError::NoHistory(identity.to_string()))?;
    let count = String::from_utf8(count)?;

    let history = CallHistory::load(store, identity)?;
    let calls = history
        .inputs
        .into_iter()
        .zip(history.outputs)
        .map(|(input, output)| -> Result<(String, String)> {
            Ok((String::from_utf8(input)?, String::from_utf8(output)?))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} recorded calls of {}", calls.len(), identity);
    Ok(Replay {
        identity: identity.to_string(),
        count,
        calls,
    })
}

// == Replay To ==
/// Writes the transcript for `identity` to `out`.
pub fn replay_to<S, W>(store: &mut S, identity: &str, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let replay = load_replay(store, identity)?;
    write!(out, "{}", replay)?;
    Ok(())
}

/// Prints the transcript for `identity` to stdout.
pub fn replay<S: KeyValueStore>(store: &mut S, identity: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay_to(store, identity, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{inputs_key, outputs_key, Cache, STORE_IDENTITY};
    use crate::store::MemoryStore;

    #[test]
    fn test_replay_transcript() {
        let mut cache = Cache::initialize(MemoryStore::new()).unwrap();
        let k1 = cache.store("foo").unwrap();
        let k2 = cache.store(42).unwrap();

        let mut out = Vec::new();
        replay_to(cache.backend_mut(), STORE_IDENTITY, &mut out).unwrap();

        let expected = format!(
            "Cache.store was called 2 times:\n\
             Cache.store(*[\"foo\"]) -> {}\n\
             Cache.store(*[42]) -> {}\n",
            k1, k2
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_load_replay_structure() {
        let mut cache = Cache::initialize(MemoryStore::new()).unwrap();
        let key = cache.store(1.5).unwrap();

        let replay = load_replay(cache.backend_mut(), STORE_IDENTITY).unwrap();
        assert_eq!(replay.identity, STORE_IDENTITY);
        assert_eq!(replay.count, "1");
        assert_eq!(replay.calls, vec![("[1.5]".to_string(), key.to_string())]);
    }

    #[test]
    fn test_replay_missing_counter() {
        let mut store = MemoryStore::new();

        let result = load_replay(&mut store, "Nobody.called");
        assert!(matches!(result, Err(CacheError::NoHistory(_))));
    }

    #[test]
    fn test_replay_zips_to_shorter_list() {
        let mut store = MemoryStore::new();
        store.set("Demo.op", b"3").unwrap();
        store.rpush(&inputs_key("Demo.op"), b"[1]").unwrap();
        store.rpush(&inputs_key("Demo.op"), b"[2]").unwrap();
        store.rpush(&inputs_key("Demo.op"), b"[3]").unwrap();
        store.rpush(&outputs_key("Demo.op"), b"a").unwrap();

        let replay = load_replay(&mut store, "Demo.op").unwrap();
        assert_eq!(replay.count, "3");
        assert_eq!(replay.calls, vec![("[1]".to_string(), "a".to_string())]);
    }

    #[test]
    fn test_replay_invalid_utf8_entry() {
        let mut store = MemoryStore::new();
        store.set("Demo.op", b"1").unwrap();
        store.rpush(&inputs_key("Demo.op"), &[0xffu8]).unwrap();
        store.rpush(&outputs_key("Demo.op"), b"a").unwrap();

        let result = load_replay(&mut store, "Demo.op");
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }

    #[test]
    fn test_display_with_no_calls() {
        let replay = Replay {
            identity: "Demo.op".to_string(),
            count: "0".to_string(),
            calls: Vec::new(),
        };
        assert_eq!(replay.to_string(), "Demo.op was called 0 times:\n");
    }
}
