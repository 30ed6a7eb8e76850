//! LSP Protocol Implementation
//!
//! Thin LSP backend that publishes bracket diagnostics for open documents.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
