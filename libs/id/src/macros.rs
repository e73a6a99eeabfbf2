//! Macros for declaring typed resource IDs and constant enumerations.

/// Declares a typed resource ID backed by a static schema.
///
/// Each entry names a `Segment` constructor. Entries followed by
/// `=> field: Type` capture a struct field; the others are literals.
///
/// This generates:
/// - the struct, with one public field per value segment
/// - `new(...)` taking the fields in declared order
/// - `example()`, built from the worked examples
/// - `parse()` (strict) and `parse_insensitively()`
/// - `id()` and `Display`, both yielding the canonical string
/// - `FromStr`, `Serialize` and `Deserialize` via the canonical string
/// - an implementation of [`ResourceId`](crate::ResourceId)
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// A resource group.
///     pub struct ResourceGroupId("ResourceGroup") {
///         static_segment("staticSubscriptions", "subscriptions"),
///         subscription_id("subscriptionId") => subscription_id: String,
///         static_segment("staticResourceGroups", "resourceGroups"),
///         resource_group("resourceGroupName") => resource_group_name: String,
///     }
/// }
///
/// let id = ResourceGroupId::new("0000", "my-rg");
/// assert_eq!(id.id(), "/subscriptions/0000/resourceGroups/my-rg");
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (@hydrate $parsed:ident, $label:literal) => {};
    (@hydrate $parsed:ident, $label:literal, $field:ident, $ty:ty) => {
        let $field = <$ty as $crate::SegmentValue>::from_segment($parsed.require($label)?);
    };

    (@into scope, $field:ident) => {
        $crate::canonical_scope(&::std::convert::Into::<String>::into($field))
    };
    (@into $ctor:ident, $field:ident) => {
        $field.into()
    };

    (@example $examples:ident, $label:literal) => {};
    (@example $examples:ident, $label:literal, $field:ident, $ty:ty) => {
        let $field = <$ty as $crate::SegmentValue>::from_segment(
            $examples.get($label).map(String::as_str).unwrap_or_default(),
        );
    };

    (@value $self:ident, $values:ident, $label:literal) => {};
    (@value $self:ident, $values:ident, $label:literal, $field:ident) => {
        $values.insert(
            $label.to_string(),
            $crate::SegmentValue::to_segment(&$self.$field),
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($type_name:literal) {
            $(
                $ctor:ident ( $label:literal $(, $arg:expr)* )
                $(=> $field:ident : $ty:ty)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name {
            $($(
                pub $field: $ty,
            )?)+
        }

        impl $name {
            /// The schema type name.
            pub const TYPE_NAME: &'static str = $type_name;

            /// Creates an ID from its field values, in declared order.
            ///
            /// Scope values are stored in canonical `/a/b` form.
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub fn new($($($field: impl Into<$ty>,)?)+) -> Self {
                Self {
                    $($($field: $crate::define_resource_id!(@into $ctor, $field),)?)+
                }
            }

            /// An ID built from the worked examples of the schema.
            #[must_use]
            pub fn example() -> Self {
                let examples = <Self as $crate::ResourceId>::schema().example_values();
                $(
                    $crate::define_resource_id!(@example examples, $label $(, $field, $ty)?);
                )+
                Self {
                    $($($field,)?)+
                }
            }

            /// Parses an ID, matching literal segments exactly.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse(input)
            }

            /// Parses an ID returned by the service, ignoring literal casing.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse_insensitively(input)
            }

            /// Formats the ID as its canonical string.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }

            /// A human-readable summary of the ID.
            #[must_use]
            pub fn description(&self) -> String {
                <Self as $crate::ResourceId>::description(self)
            }
        }

        impl $crate::ResourceId for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn schema() -> &'static $crate::ResourceIdSchema {
                static SCHEMA: ::std::sync::OnceLock<$crate::ResourceIdSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::ResourceIdSchema::new(
                        $type_name,
                        vec![$($crate::Segment::$ctor($label $(, $arg)*)),+],
                    )
                    .unwrap_or_else(|err| {
                        panic!("invalid declaration of {}: {err}", stringify!($name))
                    })
                })
            }

            fn from_parsed(
                parsed: &$crate::Parsed,
            ) -> Result<Self, $crate::ParseError> {
                $(
                    $crate::define_resource_id!(@hydrate parsed, $label $(, $field, $ty)?);
                )+
                Ok(Self {
                    $($($field,)?)+
                })
            }

            fn field_values(&self) -> ::std::collections::BTreeMap<String, String> {
                let mut values = ::std::collections::BTreeMap::new();
                $(
                    $crate::define_resource_id!(@value self, values, $label $(, $field)?);
                )+
                values
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}

/// Declares a closed enumeration usable in constant segments.
///
/// Inside identifiers the enumeration is wrapped in
/// [`Constant`](crate::Constant), which keeps unknown values instead of
/// rejecting them. The enum itself (`FromStr`, `Deserialize`) only accepts
/// known members, matched case-insensitively.
///
/// # Example
///
/// ```ignore
/// define_constant! {
///     /// DNS record types.
///     pub enum RecordType {
///         A => "A",
///         Aaaa => "AAAA",
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_constant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The canonical wire spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl $crate::ConstantEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn values() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ConstantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $crate::Constant::<Self>::resolve(s) {
                    $crate::Constant::Known(value) => Ok(value),
                    $crate::Constant::Unrecognized(value) => Err($crate::ConstantError::Unknown {
                        type_name: <Self as $crate::ConstantEnum>::TYPE_NAME,
                        value,
                        allowed: <Self as $crate::ConstantEnum>::allowed_values(),
                    }),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<Self>().map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
