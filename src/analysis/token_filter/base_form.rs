//! Base-form reduction filter.
//!
//! Replaces each token by the first base form a [`Lemmatizer`] reports for
//! it. A token the lemmatizer knows nothing about is kept as it is. The
//! result is lowercased, since dictionaries may report proper nouns
//! capitalized.

use std::sync::Arc;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Filter that reduces tokens to their canonical base form.
#[derive(Clone)]
pub struct BaseFormFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl BaseFormFilter {
    /// Create a new base-form filter backed by the given lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        BaseFormFilter { lemmatizer }
    }

    /// Get the lemmatizer used by this filter.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }
}

impl std::fmt::Debug for BaseFormFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseFormFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl Filter for BaseFormFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let base = self
                    .lemmatizer
                    .base_forms(&token.text)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| token.text.clone());
                token.with_text(base.to_lowercase())
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "base_form"
    }
}
