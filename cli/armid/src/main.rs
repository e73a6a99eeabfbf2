//! armid - CLI for ARM resource IDs
//!
//! Parses, validates, formats, and recases resource IDs against the
//! built-in registry of identifier kinds.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

/// Log level used when neither `RUST_LOG` nor `ARMID_LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    // --verbose wins, then RUST_LOG, then ARMID_LOG_LEVEL
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            std::env::var("ARMID_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
                .into()
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
