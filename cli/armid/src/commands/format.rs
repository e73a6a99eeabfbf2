//! Format command.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Build an ID from field values.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Kind of ID to build.
    #[arg(long)]
    kind: String,

    /// Field values as `field=value`.
    fields: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FormatView<'a> {
    kind: &'a str,
    id: String,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let schema = ctx.schema(&self.kind)?;
        let values = parse_assignments(&self.fields)?;
        let id = schema.format(&values).map_err(CliError::from)?;

        match ctx.format {
            OutputFormat::Json => print_single(&FormatView {
                kind: schema.type_name(),
                id,
            }),
            OutputFormat::Table => println!("{}", id),
        }

        Ok(())
    }
}

/// Splits `field=value` pairs. Values may contain `=` and `/`.
fn parse_assignments(fields: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    fields
        .iter()
        .map(|field| match field.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(CliError::InvalidField(field.clone())),
        })
        .collect()
}
