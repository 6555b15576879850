//! The entity base: identity, timestamp bookkeeping, and the
//! object→record contract the storage engine consumes.

use crate::error::ModelError;
use crate::record::{CREATED_AT_KEY, ID_KEY, Record, TYPE_KEY, UPDATED_AT_KEY};
use crate::record::{reject_nulls, string_field, timestamp_field};
use crate::timestamp::Timestamp;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// The state every entity carries: a globally unique identifier and
/// the two lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCore {
    /// Random UUID v4 string, unless supplied by a reconstruction record.
    pub id: String,
    /// Set once at construction.
    pub created_at: Timestamp,
    /// Monotonically non-decreasing; bumped by [`EntityCore::touch`].
    pub updated_at: Timestamp,
}

impl EntityCore {
    /// Fresh identity: new UUID v4, `created_at == updated_at == now`.
    #[must_use]
    pub fn fresh() -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruction path: pulls `id` and the two timestamps out of a
    /// previously serialized record.
    ///
    /// Any explicit null in the record is rejected. Timestamps are
    /// parsed from their ISO-8601 string form. An absent `id` draws a
    /// fresh UUID; an absent timestamp defaults to `now`.
    pub fn from_record(record: &Record) -> Result<Self, ModelError> {
        reject_nulls(record)?;
        let id = match string_field(record, ID_KEY)? {
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };
        let now = Timestamp::now();
        let created_at = timestamp_field(record, CREATED_AT_KEY)?.unwrap_or(now);
        let updated_at = timestamp_field(record, UPDATED_AT_KEY)?.unwrap_or(now);
        Ok(Self {
            id,
            created_at,
            updated_at,
        })
    }

    /// Bumps `updated_at` to the current time. Never moves it backward,
    /// even if the system clock stepped back.
    pub fn touch(&mut self) {
        self.updated_at = self.updated_at.max(Timestamp::now());
    }
}

/// The object-safe contract between concrete entity types and the
/// storage engine.
///
/// Implementors supply their type name, access to the [`EntityCore`],
/// and their domain attributes as a [`Record`]; everything else is
/// provided.
pub trait Entity: fmt::Debug {
    /// Stable concrete type name, used verbatim as the record
    /// discriminator and in composite storage keys.
    fn type_name(&self) -> &'static str;

    /// Identity and timestamps.
    fn core(&self) -> &EntityCore;

    /// Mutable identity and timestamps.
    fn core_mut(&mut self) -> &mut EntityCore;

    /// Domain attributes only: named fields merged with the extension
    /// bag, without the reserved keys.
    fn attributes(&self) -> Record;

    /// The canonical record: domain attributes plus `id`, the two
    /// timestamps rendered as ISO-8601 strings, and the discriminator.
    ///
    /// Reconstructing a same-typed entity from this record and calling
    /// `to_record` again yields a field-for-field identical record.
    fn to_record(&self) -> Record {
        let mut record = self.attributes();
        let core = self.core();
        record.insert(ID_KEY.to_string(), Value::String(core.id.clone()));
        record.insert(
            CREATED_AT_KEY.to_string(),
            Value::String(core.created_at.to_iso()),
        );
        record.insert(
            UPDATED_AT_KEY.to_string(),
            Value::String(core.updated_at.to_iso()),
        );
        record.insert(TYPE_KEY.to_string(), Value::String(self.type_name().to_string()));
        record
    }

    /// Composite storage key: `"<TypeName>.<id>"`.
    fn storage_key(&self) -> String {
        format!("{}.{}", self.type_name(), self.core().id)
    }

    /// Human-readable rendering: `[<TypeName>] (<id>) <attributes>`,
    /// with timestamps in their native (non-ISO) representation and no
    /// discriminator. Pure.
    fn display_string(&self) -> String {
        let core = self.core();
        let mut fields = self.attributes();
        fields.insert(ID_KEY.to_string(), Value::String(core.id.clone()));
        fields.insert(
            CREATED_AT_KEY.to_string(),
            Value::String(core.created_at.to_string()),
        );
        fields.insert(
            UPDATED_AT_KEY.to_string(),
            Value::String(core.updated_at.to_string()),
        );
        format!(
            "[{}] ({}) {}",
            self.type_name(),
            core.id,
            Value::Object(fields)
        )
    }
}

/// The sized companion to [`Entity`]: what a concrete type must supply
/// so the reload path can reconstruct it generically.
///
/// Concrete types give their named fields empty-baseline defaults when
/// a reconstruction record omits them. Reconstruction never registers
/// with a store; that is the caller's (bulk reload's) job.
pub trait EntityType: Entity + Sized + 'static {
    /// The discriminator value for this type.
    const TYPE_NAME: &'static str;

    /// Builds an instance from a previously serialized record.
    fn from_record(record: &Record) -> Result<Self, ModelError>;
}
