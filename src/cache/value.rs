//! Cache Value Module
//!
//! Defines the scalar values the cache accepts and the keys it hands out.

use std::fmt;

use serde::{Serialize, Serializer};
use uuid::Uuid;

// == Stored Value ==
/// A scalar value accepted by [`Cache::store`](crate::cache::Cache::store).
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Raw bytes, stored unchanged
    Bytes(Vec<u8>),
    /// Integer, stored as base-10 text
    Integer(i64),
    /// Floating point number, stored as shortest round-trip text
    Float(f64),
}

impl StoredValue {
    // == Storage Encoding ==
    /// Returns the bytes written to the store for this value.
    ///
    /// Floats always carry a fractional part or an exponent (`1.0`, `1e100`).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            StoredValue::Text(text) => text.as_bytes().to_vec(),
            StoredValue::Bytes(bytes) => bytes.clone(),
            StoredValue::Integer(n) => n.to_string().into_bytes(),
            StoredValue::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }
}

/// History entries record the value as a JSON scalar. Non-finite floats have
/// no JSON number form and are written as their storage text in a string.
impl Serialize for StoredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StoredValue::Text(text) => serializer.serialize_str(text),
            StoredValue::Bytes(bytes) => serializer.serialize_bytes(bytes),
            StoredValue::Integer(n) => serializer.serialize_i64(*n),
            StoredValue::Float(x) if x.is_finite() => serializer.serialize_f64(*x),
            StoredValue::Float(x) => serializer.serialize_str(&format!("{:?}", x)),
        }
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

impl From<&[u8]> for StoredValue {
    fn from(value: &[u8]) -> Self {
        StoredValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(value: Vec<u8>) -> Self {
        StoredValue::Bytes(value)
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Integer(value)
    }
}

impl From<i32> for StoredValue {
    fn from(value: i32) -> Self {
        StoredValue::Integer(i64::from(value))
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        StoredValue::Float(value)
    }
}

// == Key ==
/// Handle for exactly one stored value.
///
/// Generated from a UUID v7, so keys are unique and sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Generates a fresh key.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().hyphenated().to_string())
    }

    /// Returns the key as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
