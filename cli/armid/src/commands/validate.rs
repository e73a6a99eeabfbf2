//! Validate command.

use anyhow::Result;
use armid::{ResourceIdSchema, ValidationError};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{display_option, print_output, print_success, OutputFormat};

use super::CommandContext;

/// Check IDs against one kind.
///
/// Validation is always strict: literal segments must be canonically cased.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Resource IDs to check.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Kind the IDs must belong to.
    #[arg(long)]
    kind: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let schema = ctx.schema(&self.kind)?;
        let rows = validate_all(schema, &self.ids);
        let invalid = rows.iter().filter(|row| !row.valid).count();

        if invalid == 0 && ctx.format == OutputFormat::Table {
            print_success(&format!("{} valid {} ID(s)", rows.len(), schema.type_name()));
        } else {
            print_output(&rows, ctx.format);
        }

        if invalid > 0 {
            return Err(CliError::Failed {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn validate_all(schema: &ResourceIdSchema, ids: &[String]) -> Vec<ValidationRow> {
    ids.iter()
        .map(|id| {
            let validation = schema.validate(&serde_json::Value::String(id.clone()), "id");
            let error = validation.errors.first().map(|error| match error {
                ValidationError::InvalidId { source, .. } => source.to_string(),
                other => other.to_string(),
            });
            ValidationRow {
                id: id.clone(),
                valid: validation.is_valid(),
                error,
            }
        })
        .collect()
}
