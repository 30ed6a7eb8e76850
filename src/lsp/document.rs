use crate::check::{detect_modeline, Modeline};

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
    /// Cleared by a `bracket-lint: off` modeline
    pub enabled: bool,
}

impl DocumentState {
    pub fn new(content: String) -> Self {
        let enabled = detect_modeline(&content) != Some(Modeline::Off);
        Self { content, enabled }
    }

    /// Text of a 1-based line, split the same way the validator splits
    pub fn line(&self, line: usize) -> Option<&str> {
        self.content.split('\n').nth(line.checked_sub(1)?)
    }
}
