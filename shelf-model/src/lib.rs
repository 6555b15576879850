//! Entity model for Shelf.
//!
//! Defines the types the storage engine and concrete entity types
//! share:
//! - [`EntityCore`] — identity and lifecycle timestamps
//! - [`Entity`] / [`EntityType`] — the object↔record contract
//! - [`Timestamp`] — microsecond-precision local time with an
//!   ISO-8601 wire form
//! - [`Record`] — the JSON-object mapping representation
//! - [`TypeRegistry`] — discriminator→factory dispatch for reload
//!
//! Domain entity types live outside this crate; they implement
//! [`EntityType`] and register with a [`TypeRegistry`] at process init.

mod entity;
mod error;
mod record;
mod registry;
mod timestamp;

pub use entity::{Entity, EntityCore, EntityType};
pub use error::{ModelError, ModelResult};
pub use record::{
    CREATED_AT_KEY, ID_KEY, Record, TYPE_KEY, UPDATED_AT_KEY, domain_attributes, reject_nulls,
    string_field, timestamp_field,
};
pub use registry::{Factory, TypeRegistry};
pub use timestamp::Timestamp;
