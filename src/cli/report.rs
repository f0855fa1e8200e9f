//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow ucd to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::run::ScanOutcome;
use crate::core::{ComponentRecord, ErrorRecord};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the scan result as text: unused components to stdout, parse
/// warnings to stderr.
pub fn print(outcome: &ScanOutcome, verbose: bool) {
    print_to(outcome, &mut io::stdout().lock());
    print_parse_warning_to(&outcome.errors, verbose, &mut io::stderr().lock());
}

pub fn print_to<W: Write>(outcome: &ScanOutcome, writer: &mut W) {
    let unused: Vec<_> = outcome.unused().collect();

    if unused.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused components found!".green()
        );
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Unused components found:".bold().yellow());
    for component in &unused {
        let _ = writeln!(
            writer,
            "- {} ({})",
            component.name.bold(),
            component.file_path.dimmed()
        );
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} unused {} out of {} declared",
        unused.len(),
        if unused.len() == 1 {
            "component"
        } else {
            "components"
        },
        outcome.components.len()
    );
}

/// Print files that could not be parsed.
///
/// Verbose mode lists each file; otherwise a single summary line is printed.
pub fn print_parse_warning_to<W: Write>(errors: &[ErrorRecord], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }

    if verbose {
        for error in errors {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), error.error);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            errors.len(),
            "-v".cyan()
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    components: &'a [ComponentRecord],
    unused: Vec<&'a ComponentRecord>,
    errors: &'a [ErrorRecord],
}

pub fn print_json(outcome: &ScanOutcome) -> Result<()> {
    print_json_to(outcome, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(outcome: &ScanOutcome, writer: &mut W) -> Result<()> {
    let report = JsonReport {
        components: &outcome.components,
        unused: outcome.unused().collect(),
        errors: &outcome.errors,
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    writeln!(writer, "{}", json).context("Failed to write report")?;
    Ok(())
}
