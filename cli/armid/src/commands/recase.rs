//! Recase command.

use anyhow::Result;
use armid_recaser::Recaser;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use crate::error::CliError;
use crate::output::{display_option, print_output, OutputFormat};

use super::CommandContext;

/// Restore the canonical casing of IDs returned by the service.
#[derive(Debug, Args)]
pub struct RecaseCommand {
    /// Resource IDs to recase.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct RecaseRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Recased", display = "display_option")]
    recased: Option<String>,

    #[tabled(rename = "Kind", display = "display_option")]
    kind: Option<String>,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,
}

impl RecaseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let recaser = Recaser::new(&ctx.registry);

        // A single ID prints bare so the command composes in scripts.
        if let ([id], OutputFormat::Table) = (self.ids.as_slice(), ctx.format) {
            let recased = recaser.recase(id).map_err(CliError::from)?;
            println!("{}", recased.id);
            return Ok(());
        }

        let rows = recase_all(&recaser, &self.ids);
        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|row| row.error.is_some()).count();
        if failed > 0 {
            return Err(CliError::Failed {
                invalid: failed,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn recase_all(recaser: &Recaser<'_>, ids: &[String]) -> Vec<RecaseRow> {
    ids.iter()
        .map(|id| match recaser.recase(id) {
            Ok(recased) => RecaseRow {
                input: id.clone(),
                recased: Some(recased.id),
                kind: recased.matched,
                error: None,
            },
            Err(err) => {
                warn!(id = %id, error = %err, "could not recase ID");
                RecaseRow {
                    input: id.clone(),
                    recased: None,
                    kind: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect()
}
