//! The trait implemented by every typed identifier.

use std::collections::BTreeMap;

use crate::constant::{Constant, ConstantEnum};
use crate::error::{IdError, ParseError};
use crate::format;
use crate::parse::Parsed;
use crate::schema::ResourceIdSchema;
use crate::validate::{self, Validation};

/// A typed identifier backed by a static schema.
///
/// Implementations are normally generated by `define_resource_id!`; the
/// provided methods are the only place typed identifiers touch the parser
/// and formatter.
pub trait ResourceId: Sized {
    /// The schema type name.
    const TYPE_NAME: &'static str;

    fn schema() -> &'static ResourceIdSchema;

    /// Builds the identifier from a parse result of [`ResourceId::schema`].
    fn from_parsed(parsed: &Parsed) -> Result<Self, ParseError>;

    /// The field values keyed by segment name.
    fn field_values(&self) -> BTreeMap<String, String>;

    /// Parses `input` strictly.
    fn parse(input: &str) -> Result<Self, IdError> {
        Self::schema()
            .parse(input)
            .and_then(|parsed| Self::from_parsed(&parsed))
            .map_err(|err| IdError::parse(Self::TYPE_NAME, input, err))
    }

    /// Parses `input` ignoring the casing of literal segments.
    ///
    /// Only for IDs returned by the service; user input goes through
    /// [`ResourceId::parse`].
    fn parse_insensitively(input: &str) -> Result<Self, IdError> {
        Self::schema()
            .parse_insensitively(input)
            .and_then(|parsed| Self::from_parsed(&parsed))
            .map_err(|err| IdError::parse(Self::TYPE_NAME, input, err))
    }

    /// The canonical identifier string.
    fn id(&self) -> String {
        let values = self.field_values();
        // Every field is present by construction.
        format::format_segments(Self::schema().segments().iter(), |segment| {
            match segment.literal() {
                Some(literal) => literal.to_string(),
                None => values.get(segment.name()).cloned().unwrap_or_default(),
            }
        })
    }

    /// A human-readable summary of this identifier.
    fn description(&self) -> String {
        Self::schema().describe(&self.field_values())
    }

    /// Validates a configuration value as an identifier of this type.
    fn validate(input: &serde_json::Value, field: &str) -> Validation {
        validate::validate_id::<Self>(input, field)
    }
}

/// Conversion between a typed field and its raw segment token.
pub trait SegmentValue: Sized {
    fn from_segment(raw: &str) -> Self;
    fn to_segment(&self) -> String;
}

impl SegmentValue for String {
    fn from_segment(raw: &str) -> Self {
        raw.to_string()
    }

    fn to_segment(&self) -> String {
        self.clone()
    }
}

impl<T: ConstantEnum> SegmentValue for Constant<T> {
    fn from_segment(raw: &str) -> Self {
        Constant::resolve(raw)
    }

    fn to_segment(&self) -> String {
        self.as_str().to_string()
    }
}
