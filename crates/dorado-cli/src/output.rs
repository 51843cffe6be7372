//! Console output helpers for the generator.

use colored::Colorize;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a per-file check mark line
pub(crate) fn success(msg: &str) {
    println!("   {} {}", "✓".green().bold(), msg);
}
