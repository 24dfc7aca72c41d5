//! Analyzer that reduces words to their base form.
//!
//! Runs the [`SimpleAnalyzer`](super::SimpleAnalyzer) pipeline and then
//! replaces every word by the first base form the morphological analyzer
//! reports, falling back to the word itself.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use textbayes::analysis::analyzer::{Analyzer, BaseFormAnalyzer};
//! use textbayes::analysis::lemmatizer::DictionaryLemmatizer;
//!
//! let dictionary = DictionaryLemmatizer::from_entries([("talot", vec!["talo"])]);
//! let analyzer = BaseFormAnalyzer::new(Arc::new(dictionary));
//!
//! assert_eq!(analyzer.words("Talot ja puut").unwrap(), vec!["talo", "ja", "puut"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::base_form::BaseFormFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Splitting analyzer with morphological base-form reduction.
#[derive(Clone, Debug)]
pub struct BaseFormAnalyzer {
    inner: PipelineAnalyzer,
}

impl BaseFormAnalyzer {
    /// Create a new base-form analyzer backed by the given lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::separators()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(BaseFormFilter::new(lemmatizer)))
            .with_name("base_form");

        BaseFormAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for BaseFormAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "base_form"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lemmatizer::{DictionaryLemmatizer, SuffixLemmatizer};

    #[test]
    fn test_dictionary_base_forms() {
        let dictionary = DictionaryLemmatizer::from_entries([
            ("koirat", vec!["koira"]),
            ("koiran", vec!["koira"]),
            ("helsingissä", vec!["Helsinki"]),
        ]);
        let analyzer = BaseFormAnalyzer::new(Arc::new(dictionary));

        let words = analyzer
            .words("Koirat juoksivat. Koiran omistaja asuu Helsingissä")
            .unwrap();
        assert_eq!(
            words,
            vec!["koira", "juoksivat", "koira", "omistaja", "asuu", "helsinki"]
        );
    }

    #[test]
    fn test_suffix_base_forms() {
        let analyzer = BaseFormAnalyzer::new(Arc::new(SuffixLemmatizer::new()));
        assert_eq!(
            analyzer.words("Walking, walked").unwrap(),
            vec!["walk", "walk"]
        );
    }
}
