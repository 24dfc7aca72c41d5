//! Text analysis for textbayes.
//!
//! This module turns raw document text into the ordered, lowercase word
//! sequences the classifier consumes. A pipeline consists of a tokenizer that
//! splits text, followed by token filters that transform the stream
//! (lowercasing, empty-token removal, base-form reduction).

pub mod analyzer;
pub mod lemmatizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
