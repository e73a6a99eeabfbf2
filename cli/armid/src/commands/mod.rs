//! CLI commands.

mod describe;
mod format;
mod kinds;
mod parse;
mod recase;
mod validate;

use anyhow::Result;
use armid::{builtin_registry, CaseMode, Registry, ResourceIdSchema};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// armid - Parse, validate, and recase ARM resource IDs.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an ID and print its fields.
    Parse(parse::ParseCommand),

    /// Check IDs against one kind.
    Validate(validate::ValidateCommand),

    /// Restore the canonical casing of IDs.
    Recase(recase::RecaseCommand),

    /// Build an ID from field values.
    Format(format::FormatCommand),

    /// List the registered kinds.
    Kinds(kinds::KindsCommand),

    /// Show the segments of one kind.
    Describe(describe::DescribeCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let format =
            OutputFormat::from_name(self.format.as_deref().unwrap_or(&config.default_format));
        let registry = builtin_registry()?;

        let ctx = CommandContext {
            config,
            format,
            registry,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Recase(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Kinds(cmd) => cmd.run(ctx),
            Commands::Describe(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("armid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub registry: Registry,
}

impl CommandContext {
    /// Look up a kind by its type name.
    pub fn schema(&self, kind: &str) -> Result<&ResourceIdSchema, CliError> {
        self.registry
            .lookup(kind)
            .ok_or_else(|| CliError::UnknownKind(kind.to_string()))
    }

    /// Resolve the parse mode, preferring the flag over config.
    pub fn case_mode(&self, insensitive: bool) -> CaseMode {
        if insensitive || self.config.insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> CommandContext {
    CommandContext {
        config: Config::default(),
        format: OutputFormat::Json,
        registry: builtin_registry().unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["armid", "kinds", "--format", "json", "-v"]).unwrap();
        assert!(cli.verbose());
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_unknown_kind() {
        let ctx = test_context();
        assert!(ctx.schema("Vault").is_ok());
        assert!(matches!(
            ctx.schema("vault"),
            Err(CliError::UnknownKind(kind)) if kind == "vault"
        ));
    }

    #[test]
    fn test_case_mode_prefers_flag_or_config() {
        let mut ctx = test_context();
        assert_eq!(ctx.case_mode(false), CaseMode::Sensitive);
        assert_eq!(ctx.case_mode(true), CaseMode::Insensitive);
        ctx.config.insensitive = true;
        assert_eq!(ctx.case_mode(false), CaseMode::Insensitive);
    }
}
