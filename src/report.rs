//! Reporter
//!
//! Presentation only: renders diagnostics as human-readable text or JSON.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::check::FileReport;
use crate::validation::Diagnostic;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const SUCCESS_MESSAGE: &str = "✅ All brackets are properly matched!";

/// Write the text report for a diagnostic sequence
pub fn write_report<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    if diagnostics.is_empty() {
        writeln!(out, "{}", SUCCESS_MESSAGE)?;
        return Ok(());
    }

    writeln!(
        out,
        "\n❌ Found {} bracket matching error(s):\n",
        diagnostics.len()
    )?;
    for diagnostic in diagnostics {
        writeln!(out, "{}", diagnostic)?;
        if let Some(opening_line) = diagnostic.opening_line() {
            writeln!(out, "   (Opening bracket was on line {})", opening_line)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render the text report to a string
pub fn render(diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, diagnostics);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Print the text report to standard output
pub fn report(diagnostics: &[Diagnostic]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, diagnostics)
}

/// Write text reports for several files
///
/// A `==> path <==` header precedes each file when there is more than one.
pub fn write_file_reports<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    let with_headers = reports.len() > 1;

    for (idx, file) in reports.iter().enumerate() {
        if with_headers {
            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", file.path.display())?;
        }
        if file.skipped {
            writeln!(out, "skipped (bracket-lint: off)")?;
        } else {
            write_report(out, &file.diagnostics)?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonDiagnostic {
    kind: &'static str,
    #[serde(rename = "char")]
    character: char,
    line: usize,
    column: usize,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    opening_line: Option<usize>,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            kind: diagnostic.kind().as_str(),
            character: diagnostic.character(),
            line: diagnostic.line(),
            column: diagnostic.column(),
            message: diagnostic.message(),
            opening_line: diagnostic.opening_line(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFileReport<'a> {
    path: &'a Path,
    skipped: bool,
    diagnostics: Vec<JsonDiagnostic>,
}

/// Render file reports as a pretty-printed JSON array
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let files: Vec<JsonFileReport<'_>> = reports
        .iter()
        .map(|file| JsonFileReport {
            path: &file.path,
            skipped: file.skipped,
            diagnostics: file.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        })
        .collect();

    serde_json::to_string_pretty(&files).context("Failed to serialize report")
}

/// Write file reports in the requested format
pub fn write_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reports: &[FileReport],
) -> Result<()> {
    match format {
        OutputFormat::Text => write_file_reports(out, reports)?,
        OutputFormat::Json => writeln!(out, "{}", render_json(reports)?)?,
    }
    out.flush()?;
    Ok(())
}
