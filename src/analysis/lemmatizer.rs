//! Morphological base-form lookup.
//!
//! A [`Lemmatizer`] maps an inflected word to its candidate base forms
//! (lemmas). Analyzers use it through
//! [`BaseFormFilter`](crate::analysis::token_filter::BaseFormFilter) to
//! collapse inflections of the same word into one vocabulary entry, which
//! matters for heavily inflected languages.
//!
//! # Available Lemmatizers
//!
//! - [`dictionary::DictionaryLemmatizer`] - Lookup table loaded from JSON or TSV
//! - [`suffix::SuffixLemmatizer`] - Rule-based suffix stripping

/// Trait for morphological analyzers.
pub trait Lemmatizer: Send + Sync {
    /// Candidate base forms of `word`, most likely first.
    ///
    /// An empty result means the word is unknown to the analyzer.
    fn base_forms(&self, word: &str) -> Vec<String>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod dictionary;
pub mod suffix;

pub use dictionary::DictionaryLemmatizer;
pub use suffix::SuffixLemmatizer;
