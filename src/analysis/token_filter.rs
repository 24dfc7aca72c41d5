//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`remove_empty::RemoveEmptyFilter`] - Removes blank tokens
//! - [`base_form::BaseFormFilter`] - Replaces words by their morphological base form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Remove Empty → Lowercase → Base Form → Classifier
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod base_form;
pub mod lowercase;
pub mod remove_empty;

pub use base_form::BaseFormFilter;
pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;
