//! Terminal reporting helpers with consistent styling.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, bright_black for details
//! - **Standardized spacing**: Newline before every message block

use crate::render::RenderSummary;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.bright_black());
}

/// One-line description of what a rendered document contains
pub fn format_summary(summary: &RenderSummary) -> String {
    let mut parts = Vec::new();
    if summary.commits > 0 {
        parts.push(format!("{} commit(s)", summary.commits));
    }
    parts.push(format!("{} file(s)", summary.files));
    parts.push(format!("+{} -{}", summary.additions, summary.deletions));
    parts.join(", ")
}
