//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the input and output of a conversion run
pub fn print_header(version: &str, input: &Path, output: &Path) {
    println!();
    println!(
        " {} {} {}",
        style("◆").cyan().bold(),
        style("mysqlcsv").white().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("   {}Input:  {}", FOLDER, style(input.display()).dim());
    println!("   {}Output: {}", SAVE, style(output.display()).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(" {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!(" {}{}", INFO, message);
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!(" {}{}", WARN, style(message).for_stderr().yellow());
}

/// Render bytes for display, replacing invalid UTF-8 and dropping the line break
pub fn display_bytes(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bytes_trims_newline() {
        assert_eq!(display_bytes(b"\"a\",\"b\"\n"), "\"a\",\"b\"");
    }

    #[test]
    fn test_display_bytes_is_lossy() {
        assert_eq!(display_bytes(b"caf\xe9"), "caf\u{FFFD}");
    }
}
