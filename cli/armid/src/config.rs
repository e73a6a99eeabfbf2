//! CLI configuration.
//!
//! Read from `config.json` in the platform config directory. A missing
//! file means defaults; `ARMID_FORMAT` overrides the output format.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the output format.
const FORMAT_ENV: &str = "ARMID_FORMAT";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "armid", "armid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Parse case-insensitively unless told otherwise.
    #[serde(default)]
    pub insensitive: bool,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            insensitive: false,
        }
    }
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::from_json(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", path))?
        } else {
            Self::default()
        };

        if let Ok(format) = std::env::var(FORMAT_ENV) {
            config.default_format = format;
        }

        Ok(config)
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
