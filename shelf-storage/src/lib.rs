//! Flat-file JSON storage engine for Shelf.
//!
//! Provides [`FileStore`]: a process-local registry of all live
//! entities, keyed by `"<TypeName>.<id>"`, mirrored to a single JSON
//! file on save and rebuilt from it on reload.
//!
//! # Architecture
//!
//! - The store owns its entities as `Box<dyn Entity>` and consumes
//!   only the object→record contract from `shelf-model`
//! - Reload routes each entry's type discriminator through a
//!   `TypeRegistry` of factory functions, populated at process init
//! - A store is an explicit instance passed to whoever needs it;
//!   there is no process-wide singleton

mod error;
mod file_store;

pub use error::{StorageError, StorageResult};
pub use file_store::FileStore;
