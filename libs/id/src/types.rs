//! Built-in resource ID declarations.
//!
//! Each declaration is an instance of the generic grammar; nothing here
//! parses or formats by hand.

use crate::constant::ConstantEnum;
use crate::registry::{Registry, RegistryBuilder, RegistryError};
use crate::{define_constant, define_resource_id, ResourceId};

// =============================================================================
// Common Scopes
// =============================================================================

define_resource_id! {
    /// A subscription.
    pub struct SubscriptionId("Subscription") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
    }
}

define_resource_id! {
    /// A resource group within a subscription.
    pub struct ResourceGroupId("ResourceGroup") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
    }
}

define_resource_id! {
    /// A management group.
    pub struct ManagementGroupId("ManagementGroup") {
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftManagement", "Microsoft.Management"),
        static_segment("staticManagementGroups", "managementGroups"),
        user_specified("groupId", "groupIdValue") => group_id: String,
    }
}

define_resource_id! {
    /// Any ARM scope.
    pub struct ScopeId("Scope") {
        scope("scope") => scope: String,
    }
}

// =============================================================================
// Key Vault
// =============================================================================

define_resource_id! {
    /// A Key Vault.
    pub struct VaultId("Vault") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        static_segment("staticVaults", "vaults"),
        user_specified("vaultName", "vaultValue") => vault_name: String,
    }
}

define_resource_id! {
    /// A key stored in a Key Vault.
    pub struct KeyId("Key") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        static_segment("staticVaults", "vaults"),
        user_specified("vaultName", "vaultValue") => vault_name: String,
        static_segment("staticKeys", "keys"),
        user_specified("keyName", "keyValue") => key_name: String,
    }
}

impl KeyId {
    /// The vault this key belongs to.
    #[must_use]
    pub fn vault(&self) -> VaultId {
        VaultId::new(
            self.subscription_id.as_str(),
            self.resource_group_name.as_str(),
            self.vault_name.as_str(),
        )
    }
}

// =============================================================================
// Cost Management
// =============================================================================

define_resource_id! {
    /// A cost export at any scope.
    pub struct ScopedExportId("ScopedExport") {
        scope("scope") => scope: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftCostManagement", "Microsoft.CostManagement"),
        static_segment("staticExports", "exports"),
        user_specified("exportName", "exportValue") => export_name: String,
    }
}

// =============================================================================
// DNS
// =============================================================================

define_constant! {
    /// DNS record types.
    pub enum RecordType {
        A => "A",
        Aaaa => "AAAA",
        Caa => "CAA",
        Cname => "CNAME",
        Mx => "MX",
        Ns => "NS",
        Ptr => "PTR",
        Soa => "SOA",
        Srv => "SRV",
        Txt => "TXT",
    }
}

define_resource_id! {
    /// A public DNS zone.
    pub struct DnsZoneId("DnsZone") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        static_segment("staticDnsZones", "dnsZones"),
        user_specified("dnsZoneName", "dnsZoneValue") => dns_zone_name: String,
    }
}

define_resource_id! {
    /// All record sets of one type within a DNS zone.
    pub struct ZoneRecordTypeId("ZoneRecordType") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        static_segment("staticDnsZones", "dnsZones"),
        user_specified("dnsZoneName", "dnsZoneValue") => dns_zone_name: String,
        constant("recordType", RecordType::allowed_values()) => record_type: crate::Constant<RecordType>,
    }
}

define_resource_id! {
    /// A single record set within a DNS zone.
    pub struct RecordTypeId("RecordType") {
        static_segment("staticSubscriptions", "subscriptions"),
        subscription_id("subscriptionId") => subscription_id: String,
        static_segment("staticResourceGroups", "resourceGroups"),
        resource_group("resourceGroupName") => resource_group_name: String,
        static_segment("staticProviders", "providers"),
        resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        static_segment("staticDnsZones", "dnsZones"),
        user_specified("dnsZoneName", "dnsZoneValue") => dns_zone_name: String,
        constant("recordType", RecordType::allowed_values()) => record_type: crate::Constant<RecordType>,
        user_specified("relativeRecordSetName", "relativeRecordSetValue") => relative_record_set_name: String,
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Registers every built-in declaration, in a fixed order.
pub fn register_builtin(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register(SubscriptionId::schema())?
        .register(ResourceGroupId::schema())?
        .register(ManagementGroupId::schema())?
        .register(ScopeId::schema())?
        .register(VaultId::schema())?
        .register(KeyId::schema())?
        .register(ScopedExportId::schema())?
        .register(DnsZoneId::schema())?
        .register(ZoneRecordTypeId::schema())?
        .register(RecordTypeId::schema())?;
    Ok(())
}

/// A registry holding only the built-in declarations.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    register_builtin(&mut builder)?;
    Ok(builder.build())
}

// =============================================================================
// Tests
// =============================================================================
