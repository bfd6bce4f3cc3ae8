//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}  {}",
        style("◆").cyan().bold(),
        style("envxml").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style(".env → XML converter").dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the input/output paths of a conversion
pub fn print_paths(input: &Path, output: &Path) {
    println!(
        "    {} Input:  {}",
        FOLDER,
        style(truncate_path(input, 60)).dim()
    );
    println!(
        "    {} Output: {}",
        SAVE,
        style(truncate_path(output, 60)).dim()
    );
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, style(format!("Warning: {}", message)).yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!(
        "    {} {}",
        style("✗").red().bold(),
        style(format!("An error occurred: {}", message)).red()
    );
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - (max_len - 3)).collect();
        format!("...{}", tail)
    }
}
