use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single JSON document this service manages.
///
/// A `Document` is always a JSON object: string keys mapping to arbitrary
/// JSON values with unbounded nesting, no required fields, no schema.
/// Deserializing a top-level array or scalar fails, which enforces the
/// on-disk invariant (the backing file always holds an object) at every
/// entry point -- including HTTP request bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document (`{}`).
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse a document from raw JSON bytes.
    ///
    /// Fails on malformed JSON and on well-formed JSON whose top-level
    /// value is not an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize to pretty-printed JSON with 2-space indentation, the exact
    /// byte form persisted to disk.
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Insert a key, returning the previous value if one existed.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document is `{}`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
