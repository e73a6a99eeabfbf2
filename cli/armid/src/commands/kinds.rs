//! Kinds command.

use anyhow::Result;
use armid::Registry;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List the registered kinds.
#[derive(Debug, Args)]
pub struct KindsCommand {
    /// Only list kinds whose name contains this text (case-insensitive).
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Segments")]
    segments: usize,

    #[tabled(rename = "Template")]
    template: String,

    #[tabled(skip)]
    example: String,
}

impl KindsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = kind_rows(&ctx.registry, self.filter.as_deref());
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn kind_rows(registry: &Registry, filter: Option<&str>) -> Vec<KindRow> {
    let filter = filter.map(str::to_lowercase);
    registry
        .all()
        .filter(|schema| {
            filter
                .as_deref()
                .map_or(true, |f| schema.type_name().to_lowercase().contains(f))
        })
        .map(|schema| KindRow {
            kind: schema.type_name().to_string(),
            segments: schema.segments().len(),
            template: schema.template(),
            example: schema.example_id(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;

    #[test]
    fn test_kind_rows_are_sorted() {
        let ctx = test_context();
        let rows = kind_rows(&ctx.registry, None);
        assert_eq!(rows.len(), ctx.registry.len());
        assert!(rows.windows(2).all(|w| w[0].kind < w[1].kind));
    }

    #[test]
    fn test_kind_rows_filter() {
        let ctx = test_context();
        let rows = kind_rows(&ctx.registry, Some("VAULT"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Vault");
        assert_eq!(
            rows[0].template,
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.KeyVault/vaults/{vaultName}"
        );
        assert!(rows[0].example.ends_with("/vaults/vaultValue"));
    }
}
