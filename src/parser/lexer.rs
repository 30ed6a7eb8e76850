//! Delimiter Lexer
//!
//! Fast, simple extraction of bracket characters from a single line.
//! Everything that is not a delimiter is dropped on the floor.

use crate::delimiter::{self, DelimiterClass};

/// Token types produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Opening delimiter like `(` or `<`, with its expected closer
    Open { closer: char },
    /// Closing delimiter like `)` or `>`
    Close,
}

/// A delimiter together with its 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    pub column: usize,
}

/// Tokenize a line into its delimiters
///
/// Columns count `char`s, so a multi-byte character still occupies a
/// single column.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    line.chars()
        .enumerate()
        .filter_map(|(idx, ch)| {
            let kind = match delimiter::classify(ch)? {
                DelimiterClass::Opening { closer } => TokenKind::Open { closer },
                DelimiterClass::Closing => TokenKind::Close,
            };
            Some(Token {
                kind,
                ch,
                column: idx + 1,
            })
        })
        .collect()
}

/// Whether a line is a comment
///
/// Line-granularity heuristic: the trimmed line must start with `//` or
/// `#`. Trailing comments and block comments are not recognized.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with('#')
}
