//! Inline marker stripping.
//!
//! Emphasis, code and link markup is removed rather than converted to rich
//! runs. The only bold output comes from whole-line bold statements.

use regex::Regex;

/// Strips inline markdown markers from extracted text.
#[derive(Debug, Clone)]
pub struct InlineCleaner {
    strong: Regex,
    emphasis: Regex,
    code: Regex,
    link: Regex,
}

impl InlineCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self {
            strong: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            emphasis: Regex::new(r"\*(.*?)\*").unwrap(),
            code: Regex::new(r"`(.*?)`").unwrap(),
            link: Regex::new(r"\[(.*?)\]\(.*?\)").unwrap(),
        }
    }

    /// Remove `**bold**`, `*italic*`, `` `code` `` and `[label](target)` markup.
    ///
    /// Markers are stripped in that order; a link keeps only its label.
    pub fn clean(&self, text: &str) -> String {
        let text = self.strong.replace_all(text, "$1");
        let text = self.emphasis.replace_all(&text, "$1");
        let text = self.code.replace_all(&text, "$1");
        self.link.replace_all(&text, "$1").into_owned()
    }
}

impl Default for InlineCleaner {
    fn default() -> Self {
        Self::new()
    }
}
