//! Analyzers combine a tokenizer with token filters.
//!
//! An [`Analyzer`] is the complete text-to-words function the classifier
//! relies on:
//!
//! ```text
//! Raw Text → Analyzer → Words → Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`SimpleAnalyzer`] - Locale-agnostic separator splitting and lowercasing
//! - [`BaseFormAnalyzer`] - `SimpleAnalyzer` followed by base-form reduction
//! - [`UnicodeAnalyzer`] - Unicode word boundaries and lowercasing
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//!
//! let analyzer = SimpleAnalyzer::new();
//! let words = analyzer.words("Buy NOW, cheap!").unwrap();
//! assert_eq!(words, vec!["buy", "now", "cheap!"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Implementations must be pure: the output depends on the input text only,
/// never on previous calls. `Send + Sync` lets one analyzer be shared by all
/// documents of a corpus, including across threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the token texts, in order.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

mod base_form;
mod pipeline;
mod simple;
mod unicode;

pub use base_form::BaseFormAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use unicode::UnicodeAnalyzer;
