//! Validation Engine
//!
//! Single-pass stack matcher over the scanned lines. Separated from the
//! line scanner and from any reporting or LSP concerns.

use crate::parser::{self, ScannedLine, Token, TokenKind};

use super::diagnostic::Diagnostic;

/// An opener waiting for its closer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingOpener {
    opener: char,
    closer: char,
    line: usize,
    column: usize,
}

/// Transient state of one validation call
#[derive(Debug, Default)]
struct ScanState {
    stack: Vec<PendingOpener>,
    diagnostics: Vec<Diagnostic>,
}

impl ScanState {
    fn push_token(&mut self, line: usize, token: Token) {
        match token.kind {
            TokenKind::Open { closer } => self.stack.push(PendingOpener {
                opener: token.ch,
                closer,
                line,
                column: token.column,
            }),
            TokenKind::Close => self.close(line, token),
        }
    }

    /// Pop the top opener for a closer. A mismatch still consumes the top
    /// entry; deeper stack levels are never searched.
    fn close(&mut self, line: usize, token: Token) {
        let Some(pending) = self.stack.pop() else {
            self.emit(Diagnostic::UnmatchedClosing {
                found: token.ch,
                line,
                column: token.column,
            });
            return;
        };

        if token.ch != pending.closer {
            self.emit(Diagnostic::Mismatched {
                expected: pending.closer,
                found: token.ch,
                line,
                column: token.column,
                opening_line: pending.line,
            });
        }
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        log::trace!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Drain what is left on the stack, innermost first
    fn finish(mut self) -> Vec<Diagnostic> {
        while let Some(pending) = self.stack.pop() {
            self.emit(Diagnostic::Unclosed {
                opener: pending.opener,
                line: pending.line,
                column: pending.column,
            });
        }
        self.diagnostics
    }
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate an entire document
pub fn validate_document(content: &str) -> ValidationResult {
    let mut state = ScanState::default();
    let mut line_count = 0;
    let mut comment_lines = 0;

    for (line_idx, line) in content.split('\n').enumerate() {
        line_count += 1;
        match parser::scan_line(line) {
            ScannedLine::Comment => comment_lines += 1,
            ScannedLine::Code(tokens) => {
                for token in tokens {
                    state.push_token(line_idx + 1, token);
                }
            }
        }
    }

    let diagnostics = state.finish();
    log::debug!(
        "validated {} lines ({} comment lines skipped): {} diagnostics",
        line_count,
        comment_lines,
        diagnostics.len()
    );

    ValidationResult { diagnostics }
}

/// Validate text, returning diagnostics in discovery order
///
/// Mismatches and unmatched closers come first in reading order, followed
/// by unclosed openers from innermost to outermost. Never fails.
pub fn validate(content: &str) -> Vec<Diagnostic> {
    validate_document(content).diagnostics
}
