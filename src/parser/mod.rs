//! Line Scanner
//!
//! Splits the per-line work out of the validator: decide whether a line
//! is a comment, and if not, pull out its delimiters.

pub mod lexer;

pub use lexer::{is_comment_line, tokenize_line, Token, TokenKind};

/// A single line after scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedLine {
    /// Comment line, excluded from bracket matching
    Comment,
    /// Code line with its delimiters in left-to-right order
    Code(Vec<Token>),
}

/// Scan a single line into structured data
///
/// This is the main entry point for the scanner.
pub fn scan_line(line: &str) -> ScannedLine {
    if lexer::is_comment_line(line) {
        ScannedLine::Comment
    } else {
        ScannedLine::Code(lexer::tokenize_line(line))
    }
}
