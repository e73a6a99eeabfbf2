//! Open enumerations for constant segments.
//!
//! A constant segment is matched case-insensitively against its allowed
//! values. Unknown tokens are kept verbatim instead of failing the parse, so
//! a value introduced by the service after this client was built still
//! parses.

use std::fmt;

/// Case-folded string equality.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns the canonical member of `allowed` matching `token`, or `token`
/// itself when nothing matches.
pub fn resolve<S: AsRef<str>>(allowed: &[S], token: &str) -> String {
    allowed
        .iter()
        .map(AsRef::as_ref)
        .find(|value| eq_fold(value, token))
        .unwrap_or(token)
        .to_string()
}

/// A closed set of known values, usually generated by `define_constant!`.
pub trait ConstantEnum: Copy + Eq + Sized + 'static {
    /// Name of the enumeration, used in error messages.
    const TYPE_NAME: &'static str;

    /// Every known member, in declared order.
    fn values() -> &'static [Self];

    /// The canonical wire spelling of this member.
    fn as_str(&self) -> &'static str;

    /// The canonical spelling of every known member.
    fn allowed_values() -> Vec<&'static str> {
        Self::values().iter().map(Self::as_str).collect()
    }
}

/// A constant segment value: a known member or the raw token.
///
/// Callers have to handle `Unrecognized` explicitly rather than treating an
/// arbitrary string as a validated member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constant<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: ConstantEnum> Constant<T> {
    /// Resolves `token` case-insensitively, falling back to `Unrecognized`.
    pub fn resolve(token: &str) -> Self {
        T::values()
            .iter()
            .find(|value| eq_fold(value.as_str(), token))
            .map(|value| Constant::Known(*value))
            .unwrap_or_else(|| Constant::Unrecognized(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Constant::Known(value) => value.as_str(),
            Constant::Unrecognized(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Constant::Known(value) => Some(*value),
            Constant::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Constant::Known(_))
    }
}

impl<T: ConstantEnum> From<T> for Constant<T> {
    fn from(value: T) -> Self {
        Constant::Known(value)
    }
}

impl<T: ConstantEnum> fmt::Display for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: ConstantEnum> serde::Serialize for Constant<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: ConstantEnum> serde::Deserialize<'de> for Constant<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::resolve(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_constant;

    define_constant! {
        /// Test-only enumeration.
        pub enum Colour {
            Red => "Red",
            DarkBlue => "darkBlue",
        }
    }

    #[test]
    fn test_resolve_returns_canonical_member() {
        assert_eq!(resolve(&["A", "AAAA", "CNAME"], "cname"), "CNAME");
        assert_eq!(resolve(&["A", "AAAA"], "aaaa"), "AAAA");
    }

    #[test]
    fn test_resolve_passes_unknown_through() {
        assert_eq!(
            resolve(&["A", "AAAA"], "unknownFutureValue"),
            "unknownFutureValue"
        );
    }

    #[test]
    fn test_typed_constant_resolution() {
        assert_eq!(Constant::<Colour>::resolve("RED"), Constant::Known(Colour::Red));
        assert_eq!(
            Constant::<Colour>::resolve("DARKBLUE").as_str(),
            "darkBlue"
        );
        let other = Constant::<Colour>::resolve("Mauve");
        assert!(!other.is_known());
        assert_eq!(other.known(), None);
        assert_eq!(other.to_string(), "Mauve");
    }

    #[test]
    fn test_closed_parse_rejects_unknown() {
        assert_eq!("red".parse::<Colour>().unwrap(), Colour::Red);
        let err = "Mauve".parse::<Colour>().unwrap_err();
        assert!(err.to_string().contains("expected one of: Red, darkBlue"));
    }

    #[test]
    fn test_constant_json() {
        let value: Constant<Colour> = serde_json::from_str("\"something\"").unwrap();
        assert_eq!(value, Constant::Unrecognized("something".to_string()));
        assert_eq!(
            serde_json::to_string(&Constant::from(Colour::DarkBlue)).unwrap(),
            "\"darkBlue\""
        );
        assert_eq!(Colour::allowed_values(), vec!["Red", "darkBlue"]);
    }

    #[test]
    fn test_eq_fold_unicode() {
        assert!(eq_fold("Ünïcode", "ünÏCODE"));
        assert!(!eq_fold("abc", "abd"));
    }
}
