//! The vocabulary of path components an identifier is built from.

use serde::Serialize;

/// Example subscription used by generated documentation and `example()`.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example resource group used by generated documentation and `example()`.
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";

/// Example scope used by generated documentation and `example()`.
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group";

/// One declared component of an identifier's path grammar.
///
/// Literal segments (`Static`, `ResourceProvider`) must match a fixed token and
/// contribute no field. Every other variant captures a field keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// A fixed literal, e.g. `subscriptions`.
    Static { name: String, value: String },

    /// A provider namespace literal, e.g. `Microsoft.KeyVault`.
    ResourceProvider { name: String, value: String },

    /// A subscription ID.
    SubscriptionId { name: String, example: String },

    /// A resource group name.
    ResourceGroup { name: String, example: String },

    /// Any user supplied name.
    UserSpecified { name: String, example: String },

    /// An open enumeration; unknown tokens pass through.
    Constant { name: String, values: Vec<String> },

    /// A variable-depth prefix standing in for any ARM scope.
    Scope { name: String, example: String },
}

/// The kind of a [`Segment`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Static,
    ResourceProvider,
    SubscriptionId,
    ResourceGroup,
    UserSpecified,
    Constant,
    Scope,
}

impl SegmentKind {
    /// Short lowercase label, used in tables and descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Static => "static",
            SegmentKind::ResourceProvider => "resource_provider",
            SegmentKind::SubscriptionId => "subscription_id",
            SegmentKind::ResourceGroup => "resource_group",
            SegmentKind::UserSpecified => "user_specified",
            SegmentKind::Constant => "constant",
            SegmentKind::Scope => "scope",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Segment {
    pub fn static_segment(name: impl Into<String>, value: impl Into<String>) -> Self {
        Segment::Static {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn resource_provider(name: impl Into<String>, value: impl Into<String>) -> Self {
        Segment::ResourceProvider {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn subscription_id(name: impl Into<String>) -> Self {
        Segment::SubscriptionId {
            name: name.into(),
            example: EXAMPLE_SUBSCRIPTION_ID.to_string(),
        }
    }

    pub fn resource_group(name: impl Into<String>) -> Self {
        Segment::ResourceGroup {
            name: name.into(),
            example: EXAMPLE_RESOURCE_GROUP.to_string(),
        }
    }

    pub fn user_specified(name: impl Into<String>, example: impl Into<String>) -> Self {
        Segment::UserSpecified {
            name: name.into(),
            example: example.into(),
        }
    }

    /// A constant segment. The first allowed value doubles as the example.
    pub fn constant<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Segment::Constant {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn scope(name: impl Into<String>) -> Self {
        Segment::Scope {
            name: name.into(),
            example: EXAMPLE_SCOPE.to_string(),
        }
    }

    /// The segment label, which is also the field key for value segments.
    pub fn name(&self) -> &str {
        match self {
            Segment::Static { name, .. }
            | Segment::ResourceProvider { name, .. }
            | Segment::SubscriptionId { name, .. }
            | Segment::ResourceGroup { name, .. }
            | Segment::UserSpecified { name, .. }
            | Segment::Constant { name, .. }
            | Segment::Scope { name, .. } => name,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Static { .. } => SegmentKind::Static,
            Segment::ResourceProvider { .. } => SegmentKind::ResourceProvider,
            Segment::SubscriptionId { .. } => SegmentKind::SubscriptionId,
            Segment::ResourceGroup { .. } => SegmentKind::ResourceGroup,
            Segment::UserSpecified { .. } => SegmentKind::UserSpecified,
            Segment::Constant { .. } => SegmentKind::Constant,
            Segment::Scope { .. } => SegmentKind::Scope,
        }
    }

    /// The canonical literal of a `Static` or `ResourceProvider` segment.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Segment::Static { value, .. } | Segment::ResourceProvider { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The worked example for a value segment, or the literal otherwise.
    pub fn example(&self) -> &str {
        match self {
            Segment::Static { value, .. } | Segment::ResourceProvider { value, .. } => value,
            Segment::SubscriptionId { example, .. }
            | Segment::ResourceGroup { example, .. }
            | Segment::UserSpecified { example, .. }
            | Segment::Scope { example, .. } => example,
            Segment::Constant { values, .. } => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Returns true if this segment captures a field.
    pub fn is_field(&self) -> bool {
        self.literal().is_none()
    }

    pub fn is_scope(&self) -> bool {
        matches!(self, Segment::Scope { .. })
    }
}
