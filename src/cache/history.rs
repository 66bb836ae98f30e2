//! Call History Module
//!
//! Records invocation counts and input/output history for instrumented
//! methods in the backing store.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::KeyValueStore;

// == Key Layout ==
/// Store key of the list holding serialized call arguments.
pub fn inputs_key(identity: &str) -> String {
    format!("{}:inputs", identity)
}

/// Store key of the list holding serialized call results.
pub fn outputs_key(identity: &str) -> String {
    format!("{}:outputs", identity)
}

// == Record Call ==
/// Runs `call` with the counter and history bookkeeping for `identity`
/// around it.
///
/// The counter is incremented and `args` appended to the inputs list before
/// `call` runs; the result's `Display` text is appended to the outputs list
/// once it returns. A failing call leaves no output entry and its error is
/// returned unchanged.
pub fn record_call<S, A, T, F>(store: &mut S, identity: &str, args: &A, call: F) -> Result<T>
where
    S: KeyValueStore,
    A: Serialize + ?Sized,
    T: Display,
    F: FnOnce(&mut S) -> Result<T>,
{
    let count = store.incr(identity)?;
    let input = serde_json::to_string(args)?;
    store.rpush(&inputs_key(identity), input.as_bytes())?;

    let output = call(store)?;
    store.rpush(&outputs_key(identity), output.to_string().as_bytes())?;

    debug!("Recorded call #{} of {}", count, identity);
    Ok(output)
}

// == Call History ==
/// The raw inputs and outputs recorded for one method identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallHistory {
    /// Serialized arguments, one entry per call
    pub inputs: Vec<Vec<u8>>,
    /// Serialized results, one entry per call
    pub outputs: Vec<Vec<u8>>,
}

impl CallHistory {
    /// Reads both history lists for `identity` in full.
    pub fn load<S: KeyValueStore>(store: &mut S, identity: &str) -> Result<Self> {
        Ok(Self {
            inputs: store.lrange(&inputs_key(identity), 0, -1)?,
            outputs: store.lrange(&outputs_key(identity), 0, -1)?,
        })
    }

    /// Number of calls with both an input and an output entry.
    pub fn len(&self) -> usize {
        self.inputs.len().min(self.outputs.len())
    }

    /// Returns true if no complete call has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::store::MemoryStore;

    #[test]
    fn test_key_layout() {
        assert_eq!(inputs_key("Cache.store"), "Cache.store:inputs");
        assert_eq!(outputs_key("Cache.store"), "Cache.store:outputs");
    }

    #[test]
    fn test_record_call_bookkeeping() {
        let mut store = MemoryStore::new();

        let result = record_call(&mut store, "Demo.add", &[1, 2], |_| Ok(3)).unwrap();
        assert_eq!(result, 3);

        assert_eq!(store.get("Demo.add").unwrap(), Some(b"1".to_vec()));
        let history = CallHistory::load(&mut store, "Demo.add").unwrap();
        assert_eq!(history.inputs, vec![b"[1,2]".to_vec()]);
        assert_eq!(history.outputs, vec![b"3".to_vec()]);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_record_call_passes_store_through() {
        let mut store = MemoryStore::new();

        record_call(&mut store, "Demo.set", &["v"], |s| {
            s.set("inner", b"v")?;
            Ok("inner")
        })
        .unwrap();

        assert_eq!(store.get("inner").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_failed_call_records_no_output() {
        let mut store = MemoryStore::new();

        let result: Result<i64> = record_call(&mut store, "Demo.fail", &["x"], |_| {
            Err(CacheError::Command("boom".to_string()))
        });
        assert!(matches!(result, Err(CacheError::Command(_))));

        let history = CallHistory::load(&mut store, "Demo.fail").unwrap();
        assert_eq!(history.inputs.len(), 1);
        assert!(history.outputs.is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_missing_identity() {
        let mut store = MemoryStore::new();
        let history = CallHistory::load(&mut store, "Nobody.called").unwrap();
        assert_eq!(history, CallHistory::default());
    }
}
