//! Type-dispatch registry for reload.
//!
//! The storage file tags every entry with its concrete type name. This
//! registry maps those names to factory functions so the reload path
//! can reconstruct entities without knowing any concrete type itself.

use crate::entity::{Entity, EntityType};
use crate::error::ModelError;
use crate::record::Record;
use std::collections::HashMap;

/// Factory reconstructing a boxed entity from a record.
pub type Factory = fn(&Record) -> Result<Box<dyn Entity>, ModelError>;

/// Registry of entity factories keyed by type name.
///
/// Populated once at process init by each concrete type; handed to the
/// storage engine, which routes on the record discriminator.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    factories: HashMap<&'static str, Factory>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a concrete entity type under its `TYPE_NAME`.
    /// Re-registering a name replaces the previous factory.
    pub fn register<T: EntityType>(&mut self) {
        self.factories.insert(T::TYPE_NAME, reconstruct::<T>);
    }

    /// Looks up the factory for a type name.
    #[must_use]
    pub fn factory(&self, type_name: &str) -> Option<Factory> {
        self.factories.get(type_name).copied()
    }

    /// Returns true if a type name is registered.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

fn reconstruct<T: EntityType>(record: &Record) -> Result<Box<dyn Entity>, ModelError> {
    T::from_record(record).map(|entity| Box::new(entity) as Box<dyn Entity>)
}
