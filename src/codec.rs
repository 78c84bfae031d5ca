//! Record Codec
//!
//! Converts typed entities to [`Record`]s and back.
//!
//! Any `Serialize + DeserializeOwned` struct becomes storable by implementing
//! [`Entity`]'s two id accessors. The id attribute should be declared as
//! `#[serde(skip_serializing_if = "Option::is_none")] id: Option<u64>` so a new
//! entity serializes without one; the store fills it in on create.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TabulaError};
use crate::record::Record;

/// A storable domain object with a sequential identifier
pub trait Entity: Serialize + DeserializeOwned {
    /// The assigned identifier, `None` while the entity is new
    fn id(&self) -> Option<u64>;

    /// Assign the identifier (done once, by the store)
    fn set_id(&mut self, id: u64);

    /// Serialize into a record
    fn to_record(&self) -> Result<Record> {
        encode(self)
    }

    /// Build an entity from a stored record
    fn from_record(record: &Record) -> Result<Self> {
        decode(record)
    }
}

/// Encode an entity as a record.
///
/// Fails if the entity does not serialize to a JSON object.
pub fn encode<E: Serialize + ?Sized>(entity: &E) -> Result<Record> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(Record::from(map)),
        other => Err(TabulaError::Codec(format!(
            "entity must serialize to an object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Decode a record into an entity.
///
/// Missing or mistyped required attributes surface as [`TabulaError::Codec`].
pub fn decode<E: DeserializeOwned>(record: &Record) -> Result<E> {
    serde_json::from_value(Value::from(record.clone()))
        .map_err(|e| TabulaError::Codec(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
