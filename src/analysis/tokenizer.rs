//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of an analysis pipeline: they split raw
//! document text into a stream of tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex matching or separator (gap) splitting
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::tokenizer::Tokenizer;
//! use textbayes::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::separators();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that analyzers can be shared by
/// documents evaluated on different threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
