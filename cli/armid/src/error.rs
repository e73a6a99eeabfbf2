//! Error handling and display for the CLI.

use armid::{FormatError, ParseError};
use armid_recaser::RecaseError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown resource ID kind: {0}")]
    UnknownKind(String),

    #[error("No registered kind matches '{0}'")]
    NoMatchingKind(String),

    #[error("Invalid {kind} ID: {source}")]
    Parse {
        kind: String,
        #[source]
        source: ParseError,
    },

    #[error("Invalid field assignment '{0}', expected field=value")]
    InvalidField(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Recase(#[from] RecaseError),

    #[error("{invalid} of {total} IDs failed")]
    Failed { invalid: usize, total: usize },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownKind(_) | CliError::NoMatchingKind(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armid kinds` to list the registered kinds.".yellow()
                );
            }
            CliError::Parse { source, .. } if source.is_mismatch() => {
                eprintln!(
                    "\n{}",
                    "Hint: IDs returned by the service may need `--insensitive` or `armid recase`."
                        .yellow()
                );
            }
            CliError::Parse {
                source: ParseError::SegmentNotSpecified { parsed, .. },
                ..
            } if !parsed.is_empty() => {
                let fields: Vec<String> = parsed.iter().map(|(k, v)| format!("{k}={v}")).collect();
                eprintln!("\nParsed so far: {}", fields.join(", "));
            }
            CliError::Format(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armid describe <KIND>` to list its fields.".yellow()
                );
            }
            CliError::Recase(RecaseError::Ambiguous { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Use `armid parse --kind <KIND> --insensitive` to pick one.".yellow()
                );
            }
            _ => {}
        }
    }
}
