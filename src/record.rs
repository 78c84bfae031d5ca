//! Record
//!
//! The serialized form of an entity: an insertion-ordered mapping from
//! attribute name to JSON value. Persisted as one object inside a table file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute key holding the record identifier
pub const ID_FIELD: &str = "id";

/// One row of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Get an attribute by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set an attribute, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// The record identifier, if present and a non-negative integer
    pub fn id(&self) -> Option<u64> {
        self.0.get(ID_FIELD).and_then(Value::as_u64)
    }

    /// Set the record identifier
    pub fn set_id(&mut self, id: u64) {
        self.0.insert(ID_FIELD.to_string(), Value::from(id));
    }

    /// Rebuild the record with `id` as its first attribute.
    ///
    /// Any existing `id` attribute is replaced.
    pub fn with_id(self, id: u64) -> Self {
        let mut map = Map::with_capacity(self.0.len() + 1);
        map.insert(ID_FIELD.to_string(), Value::from(id));
        for (field, value) in self.0 {
            if field != ID_FIELD {
                map.insert(field, value);
            }
        }
        Self(map)
    }

    /// Exact, type-sensitive equality on one attribute.
    ///
    /// `1` does not match `"1"`; a missing attribute never matches.
    pub fn matches(&self, field: &str, value: &Value) -> bool {
        self.0.get(field) == Some(value)
    }

    /// Iterate attributes in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
