//! A read-only table of known schemas.
//!
//! The table is assembled explicitly by a [`RegistryBuilder`] and frozen into
//! a [`Registry`]; there is no process-wide state. Consumers (the recaser,
//! the CLI) receive the registry by reference.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::resource_id::ResourceId;
use crate::schema::ResourceIdSchema;

/// Errors raised while assembling a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A different schema is already registered under this type name.
    #[error("a different schema is already registered as '{type_name}'")]
    Conflict { type_name: String },
}

/// Collects schemas before they are frozen into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: BTreeMap<String, ResourceIdSchema>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema. Registering an identical schema again is a no-op.
    pub fn register(&mut self, schema: &ResourceIdSchema) -> Result<&mut Self, RegistryError> {
        match self.schemas.get(schema.type_name()) {
            Some(existing) if existing == schema => {
                debug!(type_name = schema.type_name(), "schema already registered");
            }
            Some(_) => {
                return Err(RegistryError::Conflict {
                    type_name: schema.type_name().to_string(),
                });
            }
            None => {
                debug!(type_name = schema.type_name(), "registering schema");
                self.schemas
                    .insert(schema.type_name().to_string(), schema.clone());
            }
        }
        Ok(self)
    }

    /// Adds the schema of a typed identifier.
    pub fn register_type<T: ResourceId>(&mut self) -> Result<&mut Self, RegistryError> {
        self.register(T::schema())
    }

    pub fn build(self) -> Registry {
        debug!(schemas = self.schemas.len(), "registry built");
        Registry {
            schemas: self.schemas,
        }
    }
}

/// An immutable table of schemas keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: BTreeMap<String, ResourceIdSchema>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn lookup(&self, type_name: &str) -> Option<&ResourceIdSchema> {
        self.schemas.get(type_name)
    }

    /// Every schema, ordered by type name.
    pub fn all(&self) -> impl Iterator<Item = &ResourceIdSchema> + '_ {
        self.schemas.values()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
