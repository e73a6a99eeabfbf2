//! Error types for resource ID schemas, parsing, and formatting.
//!
//! Every failure is a value with structured fields so callers can branch on
//! the kind of error (and the segment involved) instead of matching on
//! rendered messages. None of these errors are transient.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced while matching an input string against a schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string is empty.
    #[error("resource ID cannot be empty")]
    EmptyInput,

    /// A literal segment did not match.
    #[error(
        "segment '{segment}' mismatch: expected '{expected}', got {}",
        describe_actual(.actual)
    )]
    SegmentMismatch {
        segment: String,
        expected: String,
        /// `None` when the input ran out of tokens.
        actual: Option<String>,
    },

    /// A value segment had no corresponding (non-empty) token.
    #[error("segment '{segment}' was not specified")]
    SegmentNotSpecified {
        segment: String,
        /// Fields parsed before the failure.
        parsed: BTreeMap<String, String>,
    },

    /// The input is too short to cover the fixed segments after the scope.
    #[error(
        "scope segment '{segment}' underflow: {available} segment(s) remain but {required} are required after the scope"
    )]
    ScopeUnderflow {
        segment: String,
        available: usize,
        required: usize,
    },

    /// The input had more tokens than the schema declares.
    #[error("unexpected trailing segments: '{}'", .trailing.join("/"))]
    TrailingSegments { trailing: Vec<String> },
}

fn describe_actual(actual: &Option<String>) -> String {
    match actual {
        Some(token) => format!("'{token}'"),
        None => "nothing".to_string(),
    }
}

impl ParseError {
    /// Returns the name of the segment the error refers to, if any.
    pub fn segment(&self) -> Option<&str> {
        match self {
            ParseError::SegmentMismatch { segment, .. }
            | ParseError::SegmentNotSpecified { segment, .. }
            | ParseError::ScopeUnderflow { segment, .. } => Some(segment),
            ParseError::EmptyInput | ParseError::TrailingSegments { .. } => None,
        }
    }

    /// Returns true if a literal segment did not match.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::SegmentMismatch { .. })
    }

    /// Returns true if a value segment was missing.
    pub fn is_not_specified(&self) -> bool {
        matches!(self, ParseError::SegmentNotSpecified { .. })
    }

    pub(crate) fn not_specified(segment: &str, parsed: &BTreeMap<String, String>) -> Self {
        ParseError::SegmentNotSpecified {
            segment: segment.to_string(),
            parsed: parsed.clone(),
        }
    }
}

/// Errors raised when a schema declaration is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema type name cannot be empty")]
    EmptyTypeName,

    #[error("schema '{type_name}' declares no segments")]
    NoSegments { type_name: String },

    /// The scope length is inferred from the fixed suffix, which only works
    /// with a single scope.
    #[error("schema '{type_name}' declares more than one scope segment ('{first}' and '{second}')")]
    MultipleScopes {
        type_name: String,
        first: String,
        second: String,
    },

    #[error("schema '{type_name}' declares segment '{segment}' more than once")]
    DuplicateSegment { type_name: String, segment: String },

    #[error("schema '{type_name}' has invalid literal '{value}' for segment '{segment}'")]
    InvalidLiteral {
        type_name: String,
        segment: String,
        value: String,
    },

    #[error("schema '{type_name}' constant segment '{segment}' has no allowed values")]
    EmptyConstant { type_name: String, segment: String },
}

/// Errors raised when formatting a set of field values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("no value provided for segment '{segment}'")]
    MissingField { segment: String },
}

/// Errors raised by the typed identifier constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Parsing failed; carries the original input for diagnostics.
    #[error("parsing {type_name} from '{input}': {source}")]
    Parse {
        type_name: String,
        input: String,
        #[source]
        source: ParseError,
    },
}

impl IdError {
    pub(crate) fn parse(type_name: &str, input: &str, source: ParseError) -> Self {
        IdError::Parse {
            type_name: type_name.to_string(),
            input: input.to_string(),
            source,
        }
    }

    /// Returns the underlying parse error.
    pub fn parse_error(&self) -> &ParseError {
        match self {
            IdError::Parse { source, .. } => source,
        }
    }

    /// Returns the input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            IdError::Parse { input, .. } => input,
        }
    }
}

/// Errors raised when converting a string into a closed constant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstantError {
    #[error("'{value}' is not a known {type_name}, expected one of: {}", .allowed.join(", "))]
    Unknown {
        type_name: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_missing_token() {
        let err = ParseError::SegmentMismatch {
            segment: "staticProviders".to_string(),
            expected: "providers".to_string(),
            actual: None,
        };
        assert_eq!(
            err.to_string(),
            "segment 'staticProviders' mismatch: expected 'providers', got nothing"
        );
        assert!(err.is_mismatch());
        assert_eq!(err.segment(), Some("staticProviders"));
    }

    #[test]
    fn test_trailing_message() {
        let err = ParseError::TrailingSegments {
            trailing: vec!["extra".to_string(), "bits".to_string()],
        };
        assert_eq!(err.to_string(), "unexpected trailing segments: 'extra/bits'");
        assert_eq!(err.segment(), None);
    }

    #[test]
    fn test_id_error_keeps_input() {
        let err = IdError::parse("Vault", "/nope", ParseError::EmptyInput);
        assert_eq!(err.input(), "/nope");
        assert_eq!(err.parse_error(), &ParseError::EmptyInput);
        assert!(err.to_string().contains("parsing Vault from '/nope'"));
    }
}
