//! Validation Engine
//!
//! Bracket matching separated from line scanning and presentation.

pub mod diagnostic;
pub mod engine;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use engine::{validate, validate_document, ValidationResult};
