//! Validation adapter for configuration values.
//!
//! Either the value is a string that parses strictly against the schema, or
//! validation fails with exactly one error. There is no partial success.

use thiserror::Error;

use crate::error::ParseError;
use crate::resource_id::ResourceId;
use crate::schema::ResourceIdSchema;

/// A single validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {field} to be a string")]
    NotAString { field: String },

    #[error("{field} is not a valid {type_name} ID: {source}")]
    InvalidId {
        field: String,
        type_name: String,
        #[source]
        source: ParseError,
    },
}

/// Warnings and errors for one validated value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Validates that `input` is a string holding a strictly valid identifier of
/// `schema`.
pub fn validate(schema: &ResourceIdSchema, input: &serde_json::Value, field: &str) -> Validation {
    let Some(value) = input.as_str() else {
        return Validation::error(ValidationError::NotAString {
            field: field.to_string(),
        });
    };

    match schema.parse(value) {
        Ok(_) => Validation::default(),
        Err(source) => Validation::error(ValidationError::InvalidId {
            field: field.to_string(),
            type_name: schema.type_name().to_string(),
            source,
        }),
    }
}

/// Typed form of [`validate`].
pub fn validate_id<T: ResourceId>(input: &serde_json::Value, field: &str) -> Validation {
    validate(T::schema(), input, field)
}
