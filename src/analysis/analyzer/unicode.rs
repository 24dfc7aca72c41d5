//! Analyzer splitting on Unicode word boundaries.
//!
//! Unlike [`SimpleAnalyzer`](super::SimpleAnalyzer), punctuation inside a
//! word does not survive: `"now!"` becomes `"now"`, while `"can't"` and
//! `"3.14"` stay single words.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// UAX #29 word splitting followed by lowercasing.
#[derive(Clone, Debug)]
pub struct UnicodeAnalyzer {
    inner: PipelineAnalyzer,
}

impl UnicodeAnalyzer {
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("unicode");

        UnicodeAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for UnicodeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for UnicodeAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}
