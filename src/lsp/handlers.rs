use tower_lsp::lsp_types::{
    Diagnostic as LspDiagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location,
    NumberOrString, Position, Range, Url,
};

use crate::lsp::backend::Backend;
use crate::lsp::document::DocumentState;
use crate::validation::{validate, Diagnostic};

/// Source name attached to every published diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "bracket-lint";

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    async fn clear_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let diagnostics = document_diagnostics(&uri, doc_state);
        drop(docs);

        log::debug!("Publishing {} diagnostics for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    async fn clear_diagnostics(&self, uri: Url) {
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }
}

/// Validate a document and convert the results to LSP diagnostics
pub fn document_diagnostics(uri: &Url, doc_state: &DocumentState) -> Vec<LspDiagnostic> {
    if !doc_state.enabled {
        return Vec::new();
    }

    validate(&doc_state.content)
        .iter()
        .map(|diagnostic| create_lsp_diagnostic(uri, doc_state, diagnostic))
        .collect()
}

/// Convert a 1-based line and `char` column into an LSP position
///
/// LSP counts characters in UTF-16 code units by default.
pub fn lsp_position(doc_state: &DocumentState, line: usize, column: usize) -> Position {
    let character: usize = doc_state
        .line(line)
        .map(|text| {
            text.chars()
                .take(column.saturating_sub(1))
                .map(char::len_utf16)
                .sum()
        })
        .unwrap_or(0);

    Position::new(line.saturating_sub(1) as u32, character as u32)
}

pub fn create_lsp_diagnostic(
    uri: &Url,
    doc_state: &DocumentState,
    diagnostic: &Diagnostic,
) -> LspDiagnostic {
    let start = lsp_position(doc_state, diagnostic.line(), diagnostic.column());
    let end = Position::new(
        start.line,
        start.character + diagnostic.character().len_utf16() as u32,
    );

    let related_information = diagnostic.opening_line().map(|opening_line| {
        let position = Position::new(opening_line.saturating_sub(1) as u32, 0);
        vec![DiagnosticRelatedInformation {
            location: Location::new(uri.clone(), Range::new(position, position)),
            message: format!("Opening bracket was on line {}", opening_line),
        }]
    });

    LspDiagnostic {
        range: Range::new(start, end),
        severity: Some(DiagnosticSeverity::ERROR),
        code: Some(NumberOrString::String(diagnostic.kind().to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diagnostic.message(),
        related_information,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_uri() -> Url {
        Url::parse("file:///test.rs").expect("valid uri")
    }

    #[test]
    fn test_position_counts_utf16_units() {
        let doc = DocumentState::new("ok\n😀(".to_string());

        // '(' is the second char on line 2, after a surrogate pair
        let position = lsp_position(&doc, 2, 2);
        assert_eq!(position, Position::new(1, 2));
    }

    #[test]
    fn test_mismatched_diagnostic_conversion() {
        let doc = DocumentState::new("(\n]".to_string());
        let diagnostics = document_diagnostics(&test_uri(), &doc);

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.range, Range::new(Position::new(1, 0), Position::new(1, 1)));
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(
            diagnostic.code,
            Some(NumberOrString::String("MISMATCHED".to_string()))
        );
        assert_eq!(diagnostic.source.as_deref(), Some(DIAGNOSTIC_SOURCE));

        let related = diagnostic
            .related_information
            .as_ref()
            .expect("related information");
        assert_eq!(related[0].location.range.start.line, 0);
    }

    #[test]
    fn test_disabled_document_has_no_diagnostics() {
        let doc = DocumentState::new("// bracket-lint: off\n((((".to_string());
        assert!(document_diagnostics(&test_uri(), &doc).is_empty());
    }
}
