//! Shared test fixtures: a concrete entity type and its registry.

#![allow(dead_code)]

use serde_json::Value;
use shelf_model::{
    Entity, EntityCore, EntityType, ModelError, Record, TypeRegistry, domain_attributes,
    string_field,
};

/// A concrete entity type: four named string fields with empty-string
/// defaults, plus an extension bag for anything else.
#[derive(Debug, Clone)]
pub struct User {
    pub core: EntityCore,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub extra: Record,
}

impl User {
    pub fn fresh() -> Self {
        Self {
            core: EntityCore::fresh(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            extra: Record::new(),
        }
    }
}

impl Entity for User {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn attributes(&self) -> Record {
        let mut record = Record::new();
        record.insert("email".to_string(), Value::String(self.email.clone()));
        record.insert("password".to_string(), Value::String(self.password.clone()));
        record.insert(
            "first_name".to_string(),
            Value::String(self.first_name.clone()),
        );
        record.insert(
            "last_name".to_string(),
            Value::String(self.last_name.clone()),
        );
        for (key, value) in &self.extra {
            record.insert(key.clone(), value.clone());
        }
        record
    }
}

impl EntityType for User {
    const TYPE_NAME: &'static str = "User";

    fn from_record(record: &Record) -> Result<Self, ModelError> {
        let core = EntityCore::from_record(record)?;
        let email = string_field(record, "email")?.unwrap_or_default();
        let password = string_field(record, "password")?.unwrap_or_default();
        let first_name = string_field(record, "first_name")?.unwrap_or_default();
        let last_name = string_field(record, "last_name")?.unwrap_or_default();
        let mut extra = domain_attributes(record);
        for field in ["email", "password", "first_name", "last_name"] {
            extra.remove(field);
        }
        Ok(Self {
            core,
            email,
            password,
            first_name,
            last_name,
            extra,
        })
    }
}

/// A second concrete type, for discriminator filtering tests.
#[derive(Debug, Clone)]
pub struct Place {
    pub core: EntityCore,
    pub name: String,
    pub extra: Record,
}

impl Place {
    pub fn fresh() -> Self {
        Self {
            core: EntityCore::fresh(),
            name: String::new(),
            extra: Record::new(),
        }
    }
}

impl Entity for Place {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn attributes(&self) -> Record {
        let mut record = Record::new();
        record.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.extra {
            record.insert(key.clone(), value.clone());
        }
        record
    }
}

impl EntityType for Place {
    const TYPE_NAME: &'static str = "Place";

    fn from_record(record: &Record) -> Result<Self, ModelError> {
        let core = EntityCore::from_record(record)?;
        let name = string_field(record, "name")?.unwrap_or_default();
        let mut extra = domain_attributes(record);
        extra.remove("name");
        Ok(Self { core, name, extra })
    }
}

/// Registry knowing both test types.
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<User>();
    registry.register::<Place>();
    registry
}
