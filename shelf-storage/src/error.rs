//! Error types for the storage engine.

use shelf_model::ModelError;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage file exists but is not a valid serialized registry,
    /// or an entry names an unknown entity type.
    #[error("corrupt storage file: {0}")]
    Corrupt(String),

    /// An entry failed entity reconstruction.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Serialization error while writing the registry.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
