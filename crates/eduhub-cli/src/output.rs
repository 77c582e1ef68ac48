//! Terminal output for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// How list commands print their rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> String {
    match (format, items.is_empty()) {
        (OutputFormat::Table, true) => "No results found.".to_string(),
        (OutputFormat::Table, false) => Table::new(items).to_string(),
        (OutputFormat::Json, _) => {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    println!("{}", render_list(items, format));
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Goes to stderr.
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Indented `label: value` line, labels padded to one column.
pub fn print_kv(key: &str, value: &str) {
    let label = format!("{key}:");
    println!("  {label:<24} {value}");
}
