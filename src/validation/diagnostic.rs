//! Bracket Diagnostics

use std::fmt;

/// Kind of a bracket matching problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    UnmatchedClosing,
    Mismatched,
    Unclosed,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnmatchedClosing => "UNMATCHED_CLOSING",
            DiagnosticKind::Mismatched => "MISMATCHED",
            DiagnosticKind::Unclosed => "UNCLOSED",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bracket matching problem
///
/// Lines and columns are 1-based; columns count `char`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A closer with no pending opener
    UnmatchedClosing {
        found: char,
        line: usize,
        column: usize,
    },
    /// A closer that does not pair with the most recent opener
    Mismatched {
        expected: char,
        found: char,
        line: usize,
        column: usize,
        opening_line: usize,
    },
    /// An opener still pending at end of input, reported at its own position
    Unclosed {
        opener: char,
        line: usize,
        column: usize,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnmatchedClosing { .. } => DiagnosticKind::UnmatchedClosing,
            Diagnostic::Mismatched { .. } => DiagnosticKind::Mismatched,
            Diagnostic::Unclosed { .. } => DiagnosticKind::Unclosed,
        }
    }

    /// The offending character
    pub fn character(&self) -> char {
        match *self {
            Diagnostic::UnmatchedClosing { found, .. } | Diagnostic::Mismatched { found, .. } => {
                found
            }
            Diagnostic::Unclosed { opener, .. } => opener,
        }
    }

    pub fn line(&self) -> usize {
        match *self {
            Diagnostic::UnmatchedClosing { line, .. }
            | Diagnostic::Mismatched { line, .. }
            | Diagnostic::Unclosed { line, .. } => line,
        }
    }

    pub fn column(&self) -> usize {
        match *self {
            Diagnostic::UnmatchedClosing { column, .. }
            | Diagnostic::Mismatched { column, .. }
            | Diagnostic::Unclosed { column, .. } => column,
        }
    }

    /// Line of the opener a mismatched closer was checked against
    pub fn opening_line(&self) -> Option<usize> {
        match *self {
            Diagnostic::Mismatched { opening_line, .. } => Some(opening_line),
            _ => None,
        }
    }

    /// Human-readable description
    pub fn message(&self) -> String {
        match *self {
            Diagnostic::UnmatchedClosing { found, .. } => {
                format!("Unmatched closing bracket \"{}\"", found)
            }
            Diagnostic::Mismatched {
                expected, found, ..
            } => format!("Expected \"{}\" but found \"{}\"", expected, found),
            Diagnostic::Unclosed { opener, .. } => format!("Unclosed bracket \"{}\"", opener),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, Column {}: {}",
            self.line(),
            self.column(),
            self.message()
        )
    }
}
