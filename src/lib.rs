//! bracket-lint
//!
//! Checks that bracket-like delimiters are properly nested and closed,
//! reporting line/column diagnostics for mismatched, unmatched and
//! unclosed brackets.
//!
//! This library provides:
//! - The bracket validator and its diagnostics
//! - Text and JSON reporting
//! - File checking with modeline support, and a watch mode
//! - An LSP backend publishing diagnostics for open documents
//! - Configuration management

pub mod check;
pub mod config;
pub mod delimiter;
pub mod lsp;
pub mod parser;
pub mod report;
pub mod validation;
pub mod watch;

// Re-exports for clean public API
pub use check::{check_path, check_source, FileReport};
pub use config::Config;
pub use report::{render, report, OutputFormat};
pub use validation::{validate, validate_document, Diagnostic, DiagnosticKind};
