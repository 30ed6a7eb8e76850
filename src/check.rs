//! File checking
//!
//! Reads sources from disk or stdin, honours the `bracket-lint: off`
//! modeline and runs the validator.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;

use crate::validation::{validate, Diagnostic};

/// Path used for standard input
pub const STDIN_PATH: &str = "-";

/// Number of lines at the top and bottom of a file searched for a modeline
const MODELINE_SCAN_LINES: usize = 5;

static MODELINE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)bracket-lint\s*:\s*(on|off)\b").ok());

/// Modeline setting found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modeline {
    On,
    Off,
}

/// Outcome of checking one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Checking was turned off by a modeline
    pub skipped: bool,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Detect a `bracket-lint: on|off` modeline in document content
///
/// Only the first and last few lines are considered, so a stray mention
/// in the middle of a file does not count.
pub fn detect_modeline(content: &str) -> Option<Modeline> {
    let lines: Vec<&str> = content.lines().collect();
    let check_lines: Vec<&str> = if lines.len() <= MODELINE_SCAN_LINES * 2 {
        lines
    } else {
        let mut check = Vec::new();
        check.extend_from_slice(&lines[..MODELINE_SCAN_LINES]);
        check.extend_from_slice(&lines[lines.len() - MODELINE_SCAN_LINES..]);
        check
    };

    let modeline_re = MODELINE_RE.as_ref()?;
    for line in check_lines {
        // Looks for patterns like:
        // // bracket-lint: off
        // # vim: bracket-lint: off
        if let Some(captures) = modeline_re.captures(line) {
            let setting = captures.get(1)?.as_str();
            return Some(if setting.eq_ignore_ascii_case("off") {
                Modeline::Off
            } else {
                Modeline::On
            });
        }
    }

    None
}

/// Check in-memory source text
pub fn check_source(path: impl Into<PathBuf>, content: &str) -> FileReport {
    let path = path.into();

    if detect_modeline(content) == Some(Modeline::Off) {
        log::info!("Skipping {} (bracket-lint: off)", path.display());
        return FileReport {
            path,
            diagnostics: Vec::new(),
            skipped: true,
        };
    }

    FileReport {
        path,
        diagnostics: validate(content),
        skipped: false,
    }
}

/// Read a source file, or stdin for [`STDIN_PATH`]
///
/// Fails when the path is a directory, cannot be read, or is not UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        if path.is_dir() {
            bail!("{} is a directory, expected a text file", path.display());
        }
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8 text", path.display()))
}

/// Read and check a file
pub fn check_path(path: &Path) -> Result<FileReport> {
    let content = read_source(path)?;
    log::debug!("Checking {} ({} bytes)", path.display(), content.len());
    Ok(check_source(path, &content))
}
