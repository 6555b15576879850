//! The `FileStore` engine: an in-memory registry of live entities
//! mirrored to a single JSON file.

use crate::error::{StorageError, StorageResult};
use serde_json::Value;
use shelf_model::{Entity, Record, TYPE_KEY, TypeRegistry};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Registry of all live entities, keyed by `"<TypeName>.<id>"`, with
/// save/reload against one flat JSON file.
///
/// Every mutating operation takes `&mut self`; the single-writer
/// assumption of the design is enforced by the borrow checker rather
/// than by a lock.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    registry: TypeRegistry,
    objects: BTreeMap<String, Box<dyn Entity>>,
}

impl FileStore {
    /// Opens a store over the given file and runs [`FileStore::reload`]
    /// once. An absent file yields an empty store.
    pub fn open(path: impl Into<PathBuf>, registry: TypeRegistry) -> StorageResult<Self> {
        let mut store = Self {
            path: path.into(),
            registry,
            objects: BTreeMap::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view over every registered entity.
    pub fn all(&self) -> impl Iterator<Item = (&str, &dyn Entity)> {
        self.objects
            .iter()
            .map(|(key, entity)| (key.as_str(), entity.as_ref()))
    }

    /// Read-only view over the entities whose type name matches.
    /// Filtering an empty store yields an empty iterator.
    pub fn all_of<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a dyn Entity)> {
        self.all()
            .filter(move |(_, entity)| entity.type_name() == type_name)
    }

    /// Looks up an entity by composite key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&dyn Entity> {
        self.objects.get(key).map(Box::as_ref)
    }

    /// Mutable lookup by composite key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut (dyn Entity + 'static)> {
        self.objects.get_mut(key).map(Box::as_mut)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if no entities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Inserts an entity at its composite key, returning the key.
    /// Overwriting an existing entry is allowed (and expected on
    /// reload); no uniqueness error is raised.
    pub fn insert(&mut self, entity: Box<dyn Entity>) -> String {
        let key = entity.storage_key();
        self.objects.insert(key.clone(), entity);
        key
    }

    /// Removes an entity by composite key. The only way an entity
    /// leaves the registry.
    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Entity>> {
        self.objects.remove(key)
    }

    /// Serializes every registered entity into one JSON object keyed
    /// by composite key and replaces the storage file's content.
    ///
    /// The object is written to a sibling temp file and renamed over
    /// the target, so a crash mid-write leaves a prior valid file
    /// intact.
    pub fn save(&self) -> StorageResult<()> {
        let mut snapshot = Record::new();
        for (key, entity) in &self.objects {
            snapshot.insert(key.clone(), Value::Object(entity.to_record()));
        }
        let serialized = serde_json::to_string(&Value::Object(snapshot))?;

        let staging = self.path.with_extension("tmp");
        fs::write(&staging, serialized)?;
        fs::rename(&staging, &self.path)?;
        debug!(entries = self.objects.len(), path = %self.path.display(), "persisted registry");
        Ok(())
    }

    /// Bumps an entity's `updated_at` and flushes the whole registry.
    /// A missing key still flushes (the entity may have been removed
    /// between construction and save).
    pub fn persist(&mut self, key: &str) -> StorageResult<()> {
        if let Some(entity) = self.objects.get_mut(key) {
            entity.core_mut().touch();
        }
        self.save()
    }

    /// Reads the storage file, reconstructs every entry through the
    /// type registry, and inserts the results.
    ///
    /// An absent file leaves state untouched and is not an error.
    /// Malformed JSON, a non-object top level or entry, a missing or
    /// non-string discriminator, or an unknown type name is
    /// [`StorageError::Corrupt`]. All entries are reconstructed before
    /// any is inserted, so a failed reload leaves prior state as it
    /// was.
    pub fn reload(&mut self) -> StorageResult<()> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no storage file, nothing to reload");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let parsed: Value = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Corrupt(format!("invalid JSON: {err}")))?;
        let Value::Object(entries) = parsed else {
            return Err(StorageError::Corrupt(
                "top level is not an object".to_string(),
            ));
        };

        let mut incoming: Vec<Box<dyn Entity>> = Vec::with_capacity(entries.len());
        for (key, value) in &entries {
            let Value::Object(record) = value else {
                return Err(StorageError::Corrupt(format!(
                    "entry {key:?} is not an object"
                )));
            };
            let type_name = record
                .get(TYPE_KEY)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    StorageError::Corrupt(format!("entry {key:?} has no type discriminator"))
                })?;
            let factory = self.registry.factory(type_name).ok_or_else(|| {
                StorageError::Corrupt(format!("unknown entity type {type_name:?}"))
            })?;
            incoming.push(factory(record)?);
        }

        let count = incoming.len();
        for entity in incoming {
            self.insert(entity);
        }
        debug!(entries = count, path = %self.path.display(), "reloaded registry");
        Ok(())
    }
}
