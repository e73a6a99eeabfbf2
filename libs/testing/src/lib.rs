//! Test fixtures and proptest strategies shared by the armid crates.

use proptest::prelude::*;

/// Subscription used throughout the fixtures.
pub const SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Resource group used throughout the fixtures.
pub const RESOURCE_GROUP: &str = "example-resource-group";

/// A Key Vault ID in canonical casing.
pub const VAULT_ID: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.KeyVault/vaults/myvault";

/// A subscription-scoped cost export in canonical casing.
pub const SUBSCRIPTION_EXPORT_ID: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/providers/Microsoft.CostManagement/exports/monthly";

/// A management-group-scoped cost export in canonical casing.
pub const MANAGEMENT_GROUP_EXPORT_ID: &str = "/providers/Microsoft.Management/managementGroups/finance/providers/Microsoft.CostManagement/exports/monthly";

/// A DNS record set ID in canonical casing.
pub const RECORD_SET_ID: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.Network/dnsZones/example.com/CNAME/www";

/// Swaps the case of every ASCII letter.
pub fn flip_case(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// A single user-supplied path token: non-empty and free of `/`.
pub fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9._-]{0,23}"
}

/// A random subscription UUID in its usual lowercase hyphenated form.
pub fn subscription_id() -> impl Strategy<Value = String> {
    any::<[u8; 16]>().prop_map(|bytes| {
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    })
}

/// A scope prefix: subscription, resource group, or management group.
pub fn scope() -> impl Strategy<Value = String> {
    prop_oneof![
        subscription_id().prop_map(|sub| format!("/subscriptions/{sub}")),
        (subscription_id(), name())
            .prop_map(|(sub, rg)| format!("/subscriptions/{sub}/resourceGroups/{rg}")),
        name().prop_map(|mg| format!("/providers/Microsoft.Management/managementGroups/{mg}")),
    ]
}

/// The same string with the case of each ASCII letter chosen at random.
pub fn random_case(input: String) -> impl Strategy<Value = String> {
    let len = input.chars().count();
    proptest::collection::vec(any::<bool>(), len).prop_map(move |upper| {
        input
            .chars()
            .zip(upper)
            .map(|(c, upper)| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}
