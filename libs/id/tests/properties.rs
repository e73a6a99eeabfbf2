//! Property tests for the parse/format contract.

use armid::{
    Constant, ParseError, RecordType, ResourceId, ResourceIdSchema, ScopedExportId, VaultId,
    ZoneRecordTypeId,
};
use armid_testing::{
    flip_case, name, random_case, scope, subscription_id, MANAGEMENT_GROUP_EXPORT_ID,
    SUBSCRIPTION_EXPORT_ID, VAULT_ID,
};
use proptest::prelude::*;
use rstest::rstest;

fn vault() -> impl Strategy<Value = VaultId> {
    (subscription_id(), name(), name()).prop_map(|(sub, rg, vault)| VaultId::new(sub, rg, vault))
}

fn export() -> impl Strategy<Value = ScopedExportId> {
    (scope(), name()).prop_map(|(scope, export)| ScopedExportId::new(scope, export))
}

/// Scope spellings a caller might pass: with or without the leading `/`,
/// with a trailing `/`.
fn loose_scope() -> impl Strategy<Value = String> {
    (scope(), 0..3u8).prop_map(|(scope, style)| match style {
        0 => scope,
        1 => scope.trim_start_matches('/').to_string(),
        _ => format!("{scope}/"),
    })
}

/// Puts the schema's literals back into `input` at the literal positions,
/// leaving field and scope tokens untouched.
fn canonicalize(schema: &ResourceIdSchema, input: &str) -> String {
    let tokens: Vec<&str> = input.trim_start_matches('/').split('/').collect();
    let scope_width = (tokens.len() + 1).saturating_sub(schema.segments().len());
    let mut out = Vec::with_capacity(tokens.len());
    let mut cursor = 0;
    for segment in schema.segments() {
        let width = if segment.is_scope() { scope_width } else { 1 };
        let taken = &tokens[cursor..cursor + width];
        match segment.literal() {
            Some(literal) => out.push(literal),
            None => out.extend_from_slice(taken),
        }
        cursor += width;
    }
    format!("/{}", out.join("/"))
}

proptest! {
    #[test]
    fn vault_roundtrip(id in vault()) {
        let parsed = VaultId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn scoped_export_roundtrip_from_loose_scope(scope in loose_scope(), export in name()) {
        let id = ScopedExportId::new(scope, export);
        prop_assert!(id.scope.starts_with('/') && !id.scope.ends_with('/'));
        let parsed = ScopedExportId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn scoped_export_roundtrip(id in export()) {
        let formatted = id.id();
        prop_assert!(!formatted.contains("//"));
        let parsed = ScopedExportId::parse(&formatted).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn insensitive_vault_parse_matches_strict_parse_of_canonical_input(
        cased in vault().prop_flat_map(|id| random_case(id.id()))
    ) {
        let canonical = canonicalize(VaultId::schema(), &cased);
        let insensitive = VaultId::parse_insensitively(&cased).unwrap();
        let strict = VaultId::parse(&canonical).unwrap();
        prop_assert_eq!(insensitive.id(), strict.id());
        prop_assert_eq!(insensitive.id(), canonical);
        prop_assert_eq!(insensitive, strict);
    }

    #[test]
    fn insensitive_export_parse_matches_strict_parse_of_canonical_input(
        cased in export().prop_flat_map(|id| random_case(id.id()))
    ) {
        let canonical = canonicalize(ScopedExportId::schema(), &cased);
        let insensitive = ScopedExportId::parse_insensitively(&cased).unwrap();
        let strict = ScopedExportId::parse(&canonical).unwrap();
        prop_assert_eq!(insensitive.id(), strict.id());
        prop_assert_eq!(insensitive.id(), canonical);
        prop_assert_eq!(insensitive, strict);
    }

    #[test]
    fn scope_captures_exactly_the_prefix(scope in scope(), export in name()) {
        let input = format!("{scope}/providers/Microsoft.CostManagement/exports/{export}");
        let parsed = ScopedExportId::parse(&input).unwrap();
        prop_assert_eq!(parsed.scope, scope);
        prop_assert_eq!(parsed.export_name, export);
    }

    #[test]
    fn unknown_record_types_pass_through(value in "[a-z]{6,12}") {
        let input = format!(
            "/subscriptions/abc/resourceGroups/rg/providers/Microsoft.Network/dnsZones/example.com/{value}"
        );
        let id = ZoneRecordTypeId::parse(&input).unwrap();
        let expected = match value.parse::<RecordType>() {
            Ok(known) => Constant::Known(known),
            Err(_) => Constant::Unrecognized(value.clone()),
        };
        prop_assert_eq!(&id.record_type, &expected);
        prop_assert_eq!(id.id(), input);
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,128}") {
        let _ = VaultId::parse(&input);
        let _ = ScopedExportId::parse_insensitively(&input);
    }
}

#[test]
fn strict_rejects_uppercased_and_insensitive_restores() {
    let upper = VAULT_ID.to_uppercase();
    let err = VaultId::parse(&upper).unwrap_err();
    assert!(matches!(err.parse_error(), ParseError::SegmentMismatch { .. }));

    let flipped = flip_case(VAULT_ID);
    let id = VaultId::parse_insensitively(&flipped).unwrap();
    assert_eq!(id.id(), flip_fields(VAULT_ID));
}

/// `VAULT_ID` with only its field values case-flipped.
fn flip_fields(id: &str) -> String {
    let parsed = VaultId::parse(id).unwrap();
    VaultId::new(
        flip_case(&parsed.subscription_id),
        flip_case(&parsed.resource_group_name),
        flip_case(&parsed.vault_name),
    )
    .id()
}

#[rstest]
#[case(SUBSCRIPTION_EXPORT_ID, "/subscriptions/12345678-1234-9876-4563-123456789012")]
#[case(
    MANAGEMENT_GROUP_EXPORT_ID,
    "/providers/Microsoft.Management/managementGroups/finance"
)]
fn scoped_export_fixtures(#[case] input: &str, #[case] expected_scope: &str) {
    let id = ScopedExportId::parse(input).unwrap();
    assert_eq!(id.scope, expected_scope);
    assert_eq!(id.id(), input);
}

#[rstest]
#[case("", "EmptyInput")]
#[case("/subscriptions/", "SegmentNotSpecified")]
#[case("/subscriptions/x/resourceGroups/", "SegmentNotSpecified")]
#[case("/subscriptions/x/resourcegroups/rg", "SegmentMismatch")]
#[case(
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.KeyVault/vaults/myvault/extra",
    "TrailingSegments"
)]
fn vault_error_kinds(#[case] input: &str, #[case] kind: &str) {
    let err = VaultId::parse(input).unwrap_err();
    let actual = match err.parse_error() {
        ParseError::EmptyInput => "EmptyInput",
        ParseError::SegmentMismatch { .. } => "SegmentMismatch",
        ParseError::SegmentNotSpecified { .. } => "SegmentNotSpecified",
        ParseError::ScopeUnderflow { .. } => "ScopeUnderflow",
        ParseError::TrailingSegments { .. } => "TrailingSegments",
    };
    assert_eq!(actual, kind);
}

#[test]
fn scoped_export_underflow() {
    let err = ScopedExportId::parse("/exports/x").unwrap_err();
    assert!(matches!(
        err.parse_error(),
        ParseError::ScopeUnderflow { .. }
    ));
}

#[test]
fn schema_of_typed_id_matches_engine() {
    let schema = VaultId::schema();
    let parsed = schema.parse(VAULT_ID).unwrap();
    let id = VaultId::from_parsed(&parsed).unwrap();
    assert_eq!(schema.format(&parsed).unwrap(), id.id());
}
