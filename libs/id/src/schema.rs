//! Identifier schemas: the declarative grammar for one identifier shape.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::{FormatError, ParseError, SchemaError};
use crate::format::{self, FieldSource};
use crate::parse::{Parsed, Parser};
use crate::segment::Segment;
use crate::validate::{self, Validation};

/// An ordered sequence of segments plus the type name of the identifier.
///
/// Schemas are validated on construction and immutable afterwards, so they
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdSchema {
    type_name: String,
    segments: Vec<Segment>,
}

impl ResourceIdSchema {
    /// Builds a schema, rejecting declarations the parser cannot handle.
    pub fn new(type_name: impl Into<String>, segments: Vec<Segment>) -> Result<Self, SchemaError> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(SchemaError::EmptyTypeName);
        }
        if segments.is_empty() {
            return Err(SchemaError::NoSegments { type_name });
        }

        let mut seen = HashSet::new();
        let mut scope: Option<&str> = None;
        for segment in &segments {
            if !seen.insert(segment.name()) {
                return Err(SchemaError::DuplicateSegment {
                    type_name,
                    segment: segment.name().to_string(),
                });
            }

            match segment {
                Segment::Static { name, value } | Segment::ResourceProvider { name, value } => {
                    if value.is_empty() || value.contains('/') {
                        return Err(SchemaError::InvalidLiteral {
                            type_name,
                            segment: name.clone(),
                            value: value.clone(),
                        });
                    }
                }
                Segment::Constant { name, values } if values.is_empty() => {
                    return Err(SchemaError::EmptyConstant {
                        type_name,
                        segment: name.clone(),
                    });
                }
                Segment::Scope { name, .. } => {
                    if let Some(first) = scope {
                        return Err(SchemaError::MultipleScopes {
                            type_name: type_name.clone(),
                            first: first.to_string(),
                            second: name.clone(),
                        });
                    }
                    scope = Some(name.as_str());
                }
                _ => {}
            }
        }

        Ok(Self {
            type_name,
            segments,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Value segments in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.is_field())
    }

    /// The scope segment, if the schema declares one.
    pub fn scope_segment(&self) -> Option<&Segment> {
        self.segments.iter().find(|s| s.is_scope())
    }

    /// Number of literal segments; used to rank competing matches.
    pub fn literal_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_field()).count()
    }

    /// The worked example value of every field.
    pub fn example_values(&self) -> BTreeMap<String, String> {
        self.fields()
            .map(|s| (s.name().to_string(), s.example().to_string()))
            .collect()
    }

    /// The identifier built from the worked examples.
    pub fn example_id(&self) -> String {
        format::format_segments(self.segments.iter(), |segment| segment.example().to_string())
    }

    /// The template with `{field}` placeholders, e.g.
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`.
    pub fn template(&self) -> String {
        format::format_segments(self.segments.iter(), |segment| match segment.literal() {
            Some(literal) => literal.to_string(),
            None => format!("{{{}}}", segment.name()),
        })
    }

    /// A human-readable summary of the fields, using the given values.
    pub fn describe<V: FieldSource + ?Sized>(&self, values: &V) -> String {
        let components: Vec<String> = self
            .fields()
            .map(|segment| {
                let value = values.field(segment.name()).unwrap_or_default();
                format!("{}: {:?}", humanize(segment.name()), value)
            })
            .collect();
        format!("{} ({})", humanize(&self.type_name), components.join(" / "))
    }

    /// A human-readable summary of the schema, using the worked examples.
    pub fn description(&self) -> String {
        self.describe(&self.example_values())
    }

    /// Parses `input` with byte-exact literal matching.
    pub fn parse(&self, input: &str) -> Result<Parsed, ParseError> {
        Parser::new(self).parse(input)
    }

    /// Parses `input` with case-folded literal matching.
    ///
    /// Only for data coming back from the service; never for user input.
    pub fn parse_insensitively(&self, input: &str) -> Result<Parsed, ParseError> {
        Parser::insensitive(self).parse(input)
    }

    /// Formats field values into the canonical identifier string.
    pub fn format<V: FieldSource + ?Sized>(&self, values: &V) -> Result<String, FormatError> {
        format::format(self, values)
    }

    /// Validates an untyped configuration value against this schema.
    pub fn validate(&self, input: &serde_json::Value, field: &str) -> Validation {
        validate::validate(self, input, field)
    }
}

/// Turns `resourceGroupName` into `Resource Group Name`.
pub(crate) fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    out
}
