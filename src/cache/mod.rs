//! Cache Module
//!
//! Stores scalar values under generated keys and records how the storing
//! method was called.

mod history;
mod instrumented;
mod value;


// Re-export public types
pub use history::{inputs_key, outputs_key, record_call, CallHistory};
pub use instrumented::Cache;
pub use value::{Key, StoredValue};

// == Public Constants ==
/// Method identity under which `Cache::store` calls are recorded
pub const STORE_IDENTITY: &str = "Cache.store";
