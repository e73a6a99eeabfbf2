//! # armid-recaser
//!
//! Restores the canonical casing of resource IDs returned by the service.
//!
//! The service does not reliably preserve the casing of literal segments
//! (`resourcegroups`, `microsoft.keyvault`, ...). Given a [`Registry`], the
//! recaser finds the schema the ID belongs to and re-emits it with the
//! schema's literals. Field values are never touched.
//!
//! ## Matching
//!
//! - Every registered schema is tried with the case-insensitive parser
//! - The most specific matches win (most literal segments)
//! - Winners that disagree on the output make the ID ambiguous; this is
//!   reported, never guessed
//! - A scope value is itself recased when it is shorter than the input,
//!   otherwise only its well-known keys are
//! - With no match, only well-known ARM keys are recased

use armid::{FormatError, Registry, ResourceIdSchema};
use thiserror::Error;
use tracing::{debug, warn};

/// Keys recased when no schema matches.
const WELL_KNOWN_KEYS: &[&str] = &[
    "subscriptions",
    "resourceGroups",
    "providers",
    "managementGroups",
];

/// Recasing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecaseError {
    #[error("resource ID cannot be empty")]
    EmptyInput,

    /// More than one schema matches with a different result.
    #[error("resource ID '{input}' matches several schemas: {}", .candidates.join(", "))]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The outcome of recasing one ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recased {
    /// The recased ID.
    pub id: String,

    /// Type name of the schema that matched, if any.
    pub matched: Option<String>,
}

/// Recases IDs against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Recaser<'r> {
    registry: &'r Registry,
}

impl<'r> Recaser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Recases `input`, reporting which schema matched.
    pub fn recase(&self, input: &str) -> Result<Recased, RecaseError> {
        if input.is_empty() {
            return Err(RecaseError::EmptyInput);
        }

        let mut best: Vec<(&ResourceIdSchema, String)> = Vec::new();
        let mut best_rank: Option<usize> = None;
        for schema in self.registry.all() {
            let Ok(parsed) = schema.parse_insensitively(input) else {
                continue;
            };
            let rank = schema.literal_count();
            if best_rank.is_some_and(|top| rank < top) {
                continue;
            }

            let mut values = parsed.into_values();
            if let Some(scope) = schema.scope_segment() {
                if let Some(value) = values.get_mut(scope.name()) {
                    *value = if value.len() < input.len() {
                        self.recase_scope(value)
                    } else {
                        recase_well_known(value)
                    };
                }
            }
            let id = schema.format(&values)?;

            if best_rank.is_some_and(|top| rank > top) {
                best.clear();
            }
            best_rank = Some(rank);
            best.push((schema, id));
        }

        let Some((first_schema, first_id)) = best.first() else {
            debug!(input, "no schema matched, recasing well-known keys");
            return Ok(Recased {
                id: recase_well_known(input),
                matched: None,
            });
        };

        if best.iter().any(|(_, id)| id != first_id) {
            return Err(RecaseError::Ambiguous {
                input: input.to_string(),
                candidates: best
                    .iter()
                    .map(|(schema, _)| schema.type_name().to_string())
                    .collect(),
            });
        }

        debug!(input, matched = first_schema.type_name(), "recased resource ID");
        Ok(Recased {
            id: first_id.clone(),
            matched: Some(first_schema.type_name().to_string()),
        })
    }

    /// Recases `input`, falling back to well-known keys when the match is
    /// ambiguous and to the input itself when it is empty.
    pub fn recase_or_original(&self, input: &str) -> String {
        match self.recase(input) {
            Ok(recased) => recased.id,
            Err(RecaseError::EmptyInput) => String::new(),
            Err(err) => {
                warn!(input, error = %err, "could not recase resource ID");
                recase_well_known(input)
            }
        }
    }

    fn recase_scope(&self, scope: &str) -> String {
        match self.recase(scope) {
            Ok(recased) => recased.id,
            Err(err) => {
                debug!(scope, error = %err, "scope not recased from a schema");
                recase_well_known(scope)
            }
        }
    }
}

/// Recases the well-known ARM keys of `input`, treating the path as
/// alternating key/value pairs.
pub fn recase_well_known(input: &str) -> String {
    let (prefix, path) = match input.strip_prefix('/') {
        Some(rest) => ("/", rest),
        None => ("", input),
    };

    let recased: Vec<&str> = path
        .split('/')
        .enumerate()
        .map(|(index, token)| {
            if index % 2 != 0 {
                return token;
            }
            WELL_KNOWN_KEYS
                .iter()
                .find(|key| key.eq_ignore_ascii_case(token))
                .copied()
                .unwrap_or(token)
        })
        .collect();

    format!("{prefix}{}", recased.join("/"))
}

#[cfg(test)]
mod tests {
    use armid::{builtin_registry, RegistryBuilder, ResourceId, Segment, VaultId};
    use armid_testing::{flip_case, RECORD_SET_ID, SUBSCRIPTION_EXPORT_ID, VAULT_ID};
    use rstest::rstest;

    use super::*;

    fn recaser_with<F: FnOnce(&Registry) -> R, R>(f: F) -> R {
        let registry = builtin_registry().unwrap();
        f(&registry)
    }

    #[rstest]
    #[case(VAULT_ID, "Vault")]
    #[case(SUBSCRIPTION_EXPORT_ID, "ScopedExport")]
    #[case(RECORD_SET_ID, "RecordType")]
    #[case("/subscriptions/12345678-1234-9876-4563-123456789012", "Subscription")]
    fn test_recase_lowercased(#[case] canonical: &str, #[case] type_name: &str) {
        recaser_with(|registry| {
            let recaser = Recaser::new(registry);
            let lowered = recase_literals_only(canonical);
            let recased = recaser.recase(&lowered).unwrap();
            assert_eq!(recased.id, canonical);
            assert_eq!(recased.matched.as_deref(), Some(type_name));
        });
    }

    /// Lowercases the literal segments of a canonical fixture.
    fn recase_literals_only(canonical: &str) -> String {
        canonical
            .split('/')
            .map(|token| match token {
                "subscriptions" | "resourceGroups" | "providers" | "dnsZones" | "vaults"
                | "exports" => token.to_lowercase(),
                t if t.starts_with("Microsoft.") => t.to_lowercase(),
                t => t.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn test_field_values_keep_their_casing() {
        recaser_with(|registry| {
            let recaser = Recaser::new(registry);
            let recased = recaser.recase(&flip_case(VAULT_ID)).unwrap();
            let expected = VaultId::parse_insensitively(&flip_case(VAULT_ID))
                .unwrap()
                .id();
            assert_eq!(recased.id, expected);
        });
    }

    #[test]
    fn test_scope_is_recased_recursively() {
        recaser_with(|registry| {
            let recaser = Recaser::new(registry);
            let input = "/SUBSCRIPTIONS/abc/RESOURCEGROUPS/rg/PROVIDERS/MICROSOFT.COSTMANAGEMENT/EXPORTS/x";
            let recased = recaser.recase(input).unwrap();
            assert_eq!(
                recased.id,
                "/subscriptions/abc/resourceGroups/rg/providers/Microsoft.CostManagement/exports/x"
            );
            assert_eq!(recased.matched.as_deref(), Some("ScopedExport"));
        });
    }

    #[test]
    fn test_unknown_shape_recases_well_known_keys() {
        recaser_with(|registry| {
            let recaser = Recaser::new(registry);
            let input = "/SUBSCRIPTIONS/abc/RESOURCEGROUPS/rg/PROVIDERS/Microsoft.Web/SITES/app";
            let recased = recaser.recase(input).unwrap();
            // The scope schema swallows unknown shapes, so it still matches.
            assert_eq!(recased.matched.as_deref(), Some("Scope"));
            assert_eq!(
                recased.id,
                "/subscriptions/abc/resourceGroups/rg/providers/Microsoft.Web/SITES/app"
            );
        });
    }

    #[test]
    fn test_without_scope_schema_nothing_matches() {
        let mut builder = RegistryBuilder::new();
        builder.register_type::<VaultId>().unwrap();
        let registry = builder.build();
        let recaser = Recaser::new(&registry);
        let recased = recaser.recase("/SUBSCRIPTIONS/abc/Providers/x").unwrap();
        assert_eq!(recased.matched, None);
        assert_eq!(recased.id, "/subscriptions/abc/providers/x");
    }

    #[test]
    fn test_ambiguous_schemas_are_flagged() {
        let a = ResourceIdSchema::new(
            "Sites",
            vec![
                Segment::static_segment("staticSites", "sites"),
                Segment::user_specified("siteName", "site"),
            ],
        )
        .unwrap();
        let b = ResourceIdSchema::new(
            "SitesUpper",
            vec![
                Segment::static_segment("staticSites", "Sites"),
                Segment::user_specified("siteName", "site"),
            ],
        )
        .unwrap();
        let mut builder = RegistryBuilder::new();
        builder.register(&a).unwrap().register(&b).unwrap();
        let registry = builder.build();
        let recaser = Recaser::new(&registry);

        let err = recaser.recase("/SITES/app").unwrap_err();
        assert_eq!(
            err,
            RecaseError::Ambiguous {
                input: "/SITES/app".to_string(),
                candidates: vec!["Sites".to_string(), "SitesUpper".to_string()],
            }
        );
        assert_eq!(recaser.recase_or_original("/SITES/app"), "/SITES/app");
    }

    #[test]
    fn test_equal_results_are_not_ambiguous() {
        let a = VaultId::schema().clone();
        let b = ResourceIdSchema::new("VaultAlias", a.segments().to_vec()).unwrap();
        let mut builder = RegistryBuilder::new();
        builder.register(&a).unwrap().register(&b).unwrap();
        let registry = builder.build();
        let recased = Recaser::new(&registry)
            .recase(&VAULT_ID.to_lowercase())
            .unwrap();
        assert_eq!(recased.matched.as_deref(), Some("Vault"));
    }

    #[test]
    fn test_empty_input() {
        recaser_with(|registry| {
            let recaser = Recaser::new(registry);
            assert_eq!(recaser.recase(""), Err(RecaseError::EmptyInput));
            assert_eq!(recaser.recase_or_original(""), "");
        });
    }

    #[rstest]
    #[case("/SUBSCRIPTIONS/x", "/subscriptions/x")]
    #[case("subscriptions/x/RESOURCEGROUPS/y", "subscriptions/x/resourceGroups/y")]
    #[case("/providers/Providers/x/y", "/providers/Providers/x/y")]
    #[case(
        "/PROVIDERS/Microsoft.Management/MANAGEMENTGROUPS/mg",
        "/providers/Microsoft.Management/managementGroups/mg"
    )]
    fn test_recase_well_known(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(recase_well_known(input), expected);
    }
}
