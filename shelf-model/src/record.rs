//! The record representation shared by entities and the storage file.
//!
//! A [`Record`] is a JSON object mapping attribute names to values.
//! Four keys are reserved: the type discriminator plus `id`,
//! `created_at`, and `updated_at`. Everything else is a domain
//! attribute and is opaque to the model and the storage engine.

use crate::error::ModelError;
use crate::timestamp::Timestamp;
use serde_json::{Map, Value};

/// A JSON object keyed by attribute name.
pub type Record = Map<String, Value>;

/// Discriminator key holding the concrete type name. Used only to
/// route reconstruction during reload; never copied onto an entity.
pub const TYPE_KEY: &str = "__type__";

/// Reserved key for the entity identifier.
pub const ID_KEY: &str = "id";

/// Reserved key for the creation timestamp (ISO-8601 in records).
pub const CREATED_AT_KEY: &str = "created_at";

/// Reserved key for the last-update timestamp (ISO-8601 in records).
pub const UPDATED_AT_KEY: &str = "updated_at";

/// Rejects a record containing an explicit null for any field.
pub fn reject_nulls(record: &Record) -> Result<(), ModelError> {
    for (key, value) in record {
        if value.is_null() {
            return Err(ModelError::NullField(key.clone()));
        }
    }
    Ok(())
}

/// Extracts an optional string field. Nulls and non-string values are
/// rejected; an absent key is `None`.
pub fn string_field(record: &Record, field: &'static str) -> Result<Option<String>, ModelError> {
    match record.get(field) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) => Err(ModelError::NullField(field.to_string())),
        Some(_) => Err(ModelError::InvalidFieldType {
            field,
            expected: "string",
        }),
    }
}

/// Extracts an optional timestamp field from its ISO-8601 string form.
pub fn timestamp_field(
    record: &Record,
    field: &'static str,
) -> Result<Option<Timestamp>, ModelError> {
    match string_field(record, field)? {
        None => Ok(None),
        Some(value) => Timestamp::parse(&value).map(Some),
    }
}

/// Returns the non-reserved portion of a record: the domain attributes
/// a concrete type splits into named fields and its extension bag.
#[must_use]
pub fn domain_attributes(record: &Record) -> Record {
    record
        .iter()
        .filter(|(key, _)| {
            !matches!(key.as_str(), TYPE_KEY | ID_KEY | CREATED_AT_KEY | UPDATED_AT_KEY)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
