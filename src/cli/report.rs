//! Terminal output for the CLI.
//!
//! Everything here goes to stdout so that progress, usage errors and the
//! completion message read as one stream. Diagnostics go through `tracing`.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::markdown::Progress;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Print an error followed by the usage text.
pub fn print_usage_error(message: &str) {
    print_usage_error_to(message, &mut io::stdout().lock());
}

pub fn print_usage_error_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("Error: {}", message).red()
    );
    let _ = writeln!(writer);
    print_usage_to(writer);
}

pub fn print_usage_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "Usage:".bold());
    let _ = writeln!(writer, "  {} <INPUT_FILE> [OUTPUT_FILE]", BIN_NAME);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Example:".bold());
    let _ = writeln!(writer, "  {} README-ja.md README-en.md", BIN_NAME);
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "If no output file is specified, the default will be '<input_file>-translated.md'."
    );
}

/// Announce the line about to be translated.
pub fn print_progress(progress: Progress) {
    print_progress_to(progress, &mut io::stdout().lock());
}

pub fn print_progress_to<W: Write>(progress: Progress, writer: &mut W) {
    let what = if progress.in_code_block {
        "code block line"
    } else {
        "line"
    };
    let _ = writeln!(
        writer,
        "{} {} {}/{}...",
        "Translating".cyan(),
        what,
        progress.index,
        progress.total
    );
}

pub fn print_complete(output: &Path) {
    print_complete_to(output, &mut io::stdout().lock());
}

pub fn print_complete_to<W: Write>(output: &Path, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        "Translation complete! Saved to:".green(),
        output.display()
    );
}
