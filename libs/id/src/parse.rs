//! Matching identifier strings against a schema.
//!
//! Segments are consumed left to right. A scope segment is the exception: its
//! length is whatever is left once the fixed-width suffix after it has been
//! accounted for, so it is sized from the end of the token list.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use crate::constant::{self, eq_fold, Constant, ConstantEnum};
use crate::error::ParseError;
use crate::format::FieldSource;
use crate::schema::ResourceIdSchema;
use crate::segment::Segment;

/// How literal segments are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Byte-exact comparison. Use for anything a user typed.
    #[default]
    Sensitive,
    /// Case-folded comparison; literals are stored with schema casing.
    Insensitive,
}

/// The fields matched by a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    type_name: String,
    values: BTreeMap<String, String>,
}

impl Parsed {
    /// The type name of the schema that produced this result.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns a field, failing with `SegmentNotSpecified` if it is absent.
    pub fn require(&self, name: &str) -> Result<&str, ParseError> {
        self.get(name)
            .ok_or_else(|| ParseError::not_specified(name, &self.values))
    }

    /// Returns a constant field resolved against `T`.
    pub fn constant<T: ConstantEnum>(&self, name: &str) -> Result<Constant<T>, ParseError> {
        self.require(name).map(Constant::<T>::resolve)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl FieldSource for Parsed {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Parses strings against one schema.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    schema: &'a ResourceIdSchema,
    mode: CaseMode,
}

impl<'a> Parser<'a> {
    /// A strict (case-sensitive) parser.
    pub fn new(schema: &'a ResourceIdSchema) -> Self {
        Self::with_mode(schema, CaseMode::Sensitive)
    }

    /// A case-insensitive parser, for data returned by the service.
    pub fn insensitive(schema: &'a ResourceIdSchema) -> Self {
        Self::with_mode(schema, CaseMode::Insensitive)
    }

    pub fn with_mode(schema: &'a ResourceIdSchema, mode: CaseMode) -> Self {
        Self { schema, mode }
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    pub fn parse(&self, input: &str) -> Result<Parsed, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tokens: Vec<&str> = input.strip_prefix('/').unwrap_or(input).split('/').collect();
        let segments = self.schema.segments();
        let mut values = BTreeMap::new();
        let mut cursor = 0;

        for (index, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Static { name, value } | Segment::ResourceProvider { name, value } => {
                    let token = tokens.get(cursor).copied();
                    let matched = token.is_some_and(|token| self.literal_matches(value, token));
                    if !matched {
                        return Err(ParseError::SegmentMismatch {
                            segment: name.clone(),
                            expected: value.clone(),
                            actual: token.map(str::to_string),
                        });
                    }
                    cursor += 1;
                }
                Segment::SubscriptionId { name, .. }
                | Segment::ResourceGroup { name, .. }
                | Segment::UserSpecified { name, .. } => {
                    let token = value_token(&tokens, cursor, name, &values)?;
                    values.insert(name.clone(), token.to_string());
                    cursor += 1;
                }
                Segment::Constant { name, values: allowed } => {
                    let token = value_token(&tokens, cursor, name, &values)?;
                    values.insert(name.clone(), constant::resolve(allowed, token));
                    cursor += 1;
                }
                Segment::Scope { name, .. } => {
                    // Every segment after the scope consumes exactly one token.
                    let required = segments.len() - index - 1;
                    let available = tokens.len() - cursor;
                    let Some(width) = available.checked_sub(required) else {
                        return Err(ParseError::ScopeUnderflow {
                            segment: name.clone(),
                            available,
                            required,
                        });
                    };

                    let scope = &tokens[cursor..cursor + width];
                    if scope.is_empty() || scope.iter().any(|t| t.is_empty()) {
                        return Err(ParseError::not_specified(name, &values));
                    }
                    trace!(
                        type_name = self.schema.type_name(),
                        segment = %name,
                        width,
                        "reconciled scope segment"
                    );
                    values.insert(name.clone(), format!("/{}", scope.join("/")));
                    cursor += width;
                }
            }
        }

        if cursor < tokens.len() {
            return Err(ParseError::TrailingSegments {
                trailing: tokens[cursor..].iter().map(|t| t.to_string()).collect(),
            });
        }

        Ok(Parsed {
            type_name: self.schema.type_name().to_string(),
            values,
        })
    }

    fn literal_matches(&self, expected: &str, token: &str) -> bool {
        match self.mode {
            CaseMode::Sensitive => expected == token,
            CaseMode::Insensitive => eq_fold(expected, token),
        }
    }
}

fn value_token<'t>(
    tokens: &[&'t str],
    cursor: usize,
    name: &str,
    parsed: &BTreeMap<String, String>,
) -> Result<&'t str, ParseError> {
    match tokens.get(cursor).copied() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ParseError::not_specified(name, parsed)),
    }
}
