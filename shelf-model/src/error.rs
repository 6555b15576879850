//! Error types for the entity model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while reconstructing entities from records.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A timestamp field held a string that is not valid ISO-8601.
    #[error("invalid ISO-8601 timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// A record field held an explicit null.
    #[error("null value for field {0:?}")]
    NullField(String),

    /// A reserved field held a value of the wrong JSON type.
    #[error("field {field:?} must be a {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },
}
