//! Parse command.

use anyhow::Result;
use armid::{CaseMode, Parsed, Parser, Registry, ResourceIdSchema};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Parse an ID and print its fields.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Resource ID to parse.
    id: String,

    /// Kind to parse against. Every registered kind is tried when omitted.
    #[arg(long)]
    kind: Option<String>,

    /// Match literal segments case-insensitively.
    #[arg(long)]
    insensitive: bool,
}

/// A parsed ID with its canonical form.
#[derive(Debug, Serialize)]
struct ParseView {
    kind: String,
    id: String,
    description: String,
    fields: Vec<FieldRow>,
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Value")]
    value: String,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mode = ctx.case_mode(self.insensitive);
        let view = match &self.kind {
            Some(kind) => {
                let schema = ctx.schema(kind)?;
                let parsed = Parser::with_mode(schema, mode)
                    .parse(&self.id)
                    .map_err(|source| CliError::Parse {
                        kind: kind.clone(),
                        source,
                    })?;
                parse_view(schema, &parsed)?
            }
            None => {
                let (schema, parsed) = best_match(&ctx.registry, &self.id, mode)
                    .ok_or_else(|| CliError::NoMatchingKind(self.id.clone()))?;
                parse_view(schema, &parsed)?
            }
        };

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("{} {}", view.kind.bold(), view.id);
                print_output(&view.fields, ctx.format);
            }
        }

        Ok(())
    }
}

/// The most specific registered kind that accepts `id`.
fn best_match<'r>(
    registry: &'r Registry,
    id: &str,
    mode: CaseMode,
) -> Option<(&'r ResourceIdSchema, Parsed)> {
    let mut best: Option<(&ResourceIdSchema, Parsed)> = None;
    for schema in registry.all() {
        let Ok(parsed) = Parser::with_mode(schema, mode).parse(id) else {
            continue;
        };
        debug!(kind = schema.type_name(), "kind accepts ID");
        if best
            .as_ref()
            .map_or(true, |(current, _)| schema.literal_count() > current.literal_count())
        {
            best = Some((schema, parsed));
        }
    }
    best
}

fn parse_view(schema: &ResourceIdSchema, parsed: &Parsed) -> Result<ParseView, CliError> {
    let fields = schema
        .fields()
        .map(|segment| FieldRow {
            name: segment.name().to_string(),
            kind: segment.kind().to_string(),
            value: parsed.get(segment.name()).unwrap_or_default().to_string(),
        })
        .collect();

    Ok(ParseView {
        kind: schema.type_name().to_string(),
        id: schema.format(parsed)?,
        description: schema.describe(parsed),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use armid_testing::{flip_case, SUBSCRIPTION_EXPORT_ID, VAULT_ID};

    use super::*;
    use crate::commands::test_context;

    #[test]
    fn test_best_match_prefers_most_literals() {
        let ctx = test_context();
        let (schema, parsed) = best_match(&ctx.registry, VAULT_ID, CaseMode::Sensitive).unwrap();
        assert_eq!(schema.type_name(), "Vault");
        assert_eq!(parsed.get("vaultName"), Some("myvault"));

        let (schema, _) =
            best_match(&ctx.registry, SUBSCRIPTION_EXPORT_ID, CaseMode::Sensitive).unwrap();
        assert_eq!(schema.type_name(), "ScopedExport");
    }

    #[test]
    fn test_best_match_respects_case_mode() {
        let ctx = test_context();
        let flipped = flip_case(VAULT_ID);
        // Only the scope kind takes a wrongly cased ID in strict mode.
        let (schema, _) = best_match(&ctx.registry, &flipped, CaseMode::Sensitive).unwrap();
        assert_eq!(schema.type_name(), "Scope");
        let (schema, _) = best_match(&ctx.registry, &flipped, CaseMode::Insensitive).unwrap();
        assert_eq!(schema.type_name(), "Vault");
    }

    #[test]
    fn test_best_match_none() {
        let ctx = test_context();
        assert!(best_match(&ctx.registry, "", CaseMode::Sensitive).is_none());
    }

    #[test]
    fn test_parse_view_canonicalizes() {
        let ctx = test_context();
        let schema = ctx.schema("Vault").unwrap();
        let parsed = schema.parse_insensitively(&VAULT_ID.to_lowercase()).unwrap();
        let view = parse_view(schema, &parsed).unwrap();
        assert!(view.id.contains("/resourceGroups/"));
        assert_eq!(view.fields.len(), 3);
        assert_eq!(view.fields[2].name, "vaultName");
        assert_eq!(view.fields[2].kind, "user_specified");
    }

    #[test]
    fn test_run_unknown_kind() {
        let cmd = ParseCommand {
            id: VAULT_ID.to_string(),
            kind: Some("Nope".to_string()),
            insensitive: false,
        };
        let err = cmd.run(test_context()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownKind(_))
        ));
    }
}
