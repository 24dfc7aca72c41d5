//! Locale-agnostic analyzer.
//!
//! Splits text on runs of common punctuation or whitespace, drops blank
//! pieces, and lowercases what remains. No language knowledge is involved.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// The locale-agnostic splitting analyzer.
#[derive(Clone, Debug)]
pub struct SimpleAnalyzer {
    inner: PipelineAnalyzer,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::separators()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("simple");

        SimpleAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_analyzer() {
        let analyzer = SimpleAnalyzer::new();
        let words = analyzer
            .words("Subject: Meeting TODAY\n\nHello friend, see you at 10:30 (room B/2)")
            .unwrap();

        assert_eq!(
            words,
            vec![
                "subject", "meeting", "today", "hello", "friend", "see", "you", "at", "10", "30",
                "room", "b", "2"
            ]
        );
    }

    #[test]
    fn test_simple_analyzer_is_pure() {
        let analyzer = SimpleAnalyzer::new();
        let text = "Same text, same words.";
        assert_eq!(analyzer.words(text).unwrap(), analyzer.words(text).unwrap());
    }

    #[test]
    fn test_empty_text() {
        assert!(SimpleAnalyzer::new().words("").unwrap().is_empty());
    }
}
