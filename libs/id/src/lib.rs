//! # armid
//!
//! Parsing and formatting of hierarchical ARM resource IDs.
//!
//! ## Design Principles
//!
//! - Every identifier shape is declared as data: an ordered list of segments
//! - One generic parser and one formatter serve every declaration
//! - Parse and format are inverses: `parse(format(id)) == id`
//! - Literals are always re-emitted in their declared (canonical) casing
//! - Constant segments are open: unknown values pass through unchanged
//!
//! ## ID Format
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.KeyVault/vaults/{vaultName}
//! /{scope}/providers/Microsoft.CostManagement/exports/{exportName}
//! ```
//!
//! A scope segment stands in for any nested prefix (a subscription, a
//! resource group, a management group or another resource). Its length is
//! inferred from the fixed segments that follow it.
//!
//! ## Parsing Modes
//!
//! - Strict: literals must match byte for byte. Use for user input.
//! - Insensitive: literals are compared case-folded and stored canonically.
//!   Use only for IDs returned by the service.

mod constant;
mod error;
mod format;
mod macros;
mod parse;
mod registry;
mod resource_id;
mod schema;
mod segment;
mod types;
mod validate;

pub use constant::{resolve, Constant, ConstantEnum};
pub use error::{ConstantError, FormatError, IdError, ParseError, SchemaError};
pub use format::{canonical_scope, format, FieldSource};
pub use parse::{CaseMode, Parsed, Parser};
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use resource_id::{ResourceId, SegmentValue};
pub use schema::ResourceIdSchema;
pub use segment::{
    Segment, SegmentKind, EXAMPLE_RESOURCE_GROUP, EXAMPLE_SCOPE, EXAMPLE_SUBSCRIPTION_ID,
};
pub use types::*;
pub use validate::{validate, validate_id, Validation, ValidationError};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
