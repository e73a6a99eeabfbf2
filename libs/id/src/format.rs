//! Formatting field values back into canonical identifier strings.

use std::collections::{BTreeMap, HashMap};

use crate::error::FormatError;
use crate::schema::ResourceIdSchema;
use crate::segment::Segment;

/// Anything that can supply a value for a named field.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for [(&str, &str)] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> FieldSource for [(&str, &str); N] {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }
}

/// Formats `values` with the canonical literals of `schema`.
///
/// Literals always use the schema's casing; fields are emitted verbatim,
/// except scope values which lose their surrounding slashes so the result
/// never contains `//`.
pub fn format<V: FieldSource + ?Sized>(
    schema: &ResourceIdSchema,
    values: &V,
) -> Result<String, FormatError> {
    if let Some(missing) = schema.fields().find(|s| values.field(s.name()).is_none()) {
        return Err(FormatError::MissingField {
            segment: missing.name().to_string(),
        });
    }

    Ok(format_segments(schema.segments().iter(), |segment| {
        match segment.literal() {
            Some(literal) => literal.to_string(),
            None => values
                .field(segment.name())
                .unwrap_or_default()
                .to_string(),
        }
    }))
}

/// The canonical form of a scope value: one leading `/`, none trailing.
///
/// `subscriptions/abc/` becomes `/subscriptions/abc`. A value made only of
/// slashes is empty.
pub fn canonical_scope(value: &str) -> String {
    let trimmed = value.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Joins one piece per segment into a `/`-prefixed path.
pub(crate) fn format_segments<'a, I, F>(segments: I, mut piece: F) -> String
where
    I: Iterator<Item = &'a Segment>,
    F: FnMut(&Segment) -> String,
{
    let mut out = String::new();
    for segment in segments {
        let value = piece(segment);
        let value = if segment.is_scope() {
            value.trim_matches('/')
        } else {
            value.as_str()
        };
        // An empty scope contributes nothing, not an empty path element.
        if value.is_empty() && segment.is_scope() {
            continue;
        }
        out.push('/');
        out.push_str(value);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
