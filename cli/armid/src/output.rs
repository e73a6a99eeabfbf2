//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Anything other than `json` falls back to tables.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            println!("{}", format_json(data, "[]"));
        }
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize + ?Sized>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Renders a missing value the way tables show it.
pub fn display_option(opt: &Option<String>) -> String {
    opt.clone().unwrap_or_else(|| "-".to_string())
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Table);
    }

    #[test]
    fn test_format_json_is_pretty() {
        let value = serde_json::json!({ "kind": "Vault" });
        assert_eq!(format_json(&value, "{}"), "{\n  \"kind\": \"Vault\"\n}");
    }

    #[test]
    fn test_display_option() {
        assert_eq!(display_option(&None), "-");
        assert_eq!(display_option(&Some("x".to_string())), "x");
    }
}
