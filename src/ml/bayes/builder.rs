//! Mutable training accumulator.

use ahash::AHashMap;
use log::debug;

use super::DEFAULT_ALPHA;
use super::category::Category;
use super::classifier::BayesClassifier;
use crate::error::{Result, TextBayesError};

/// Accumulates labeled training documents.
///
/// Categories are created on first use and keep that first-seen order,
/// which is also the order used to break scoring ties.
#[derive(Debug, Clone)]
pub struct BayesClassifierBuilder {
    categories: Vec<Category>,
    index: AHashMap<String, usize>,
    alpha: f64,
}

impl BayesClassifierBuilder {
    pub fn new() -> Self {
        BayesClassifierBuilder {
            categories: Vec::new(),
            index: AHashMap::new(),
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Set the additive smoothing constant; must be positive and finite.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Add one training document to the category `label`.
    pub fn add_document(&mut self, label: &str, words: &[String]) {
        let position = match self.index.get(label) {
            Some(&position) => position,
            None => {
                self.categories.push(Category::new(label));
                self.index.insert(label.to_string(), self.categories.len() - 1);
                self.categories.len() - 1
            }
        };
        self.categories[position].add_document(words);
    }

    /// Number of categories seen so far.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Freeze the accumulated statistics into a classifier.
    ///
    /// Fails when no document was added, since a classifier without
    /// categories cannot classify anything.
    pub fn build(self) -> Result<BayesClassifier> {
        if self.categories.is_empty() {
            return Err(TextBayesError::config(
                "cannot build a classifier without any categories",
            ));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(TextBayesError::config(format!(
                "smoothing constant must be positive, got {}",
                self.alpha
            )));
        }

        let total_words: usize = self.categories.iter().map(Category::total_words).sum();

        let mut occurrences: AHashMap<String, usize> = AHashMap::new();
        for category in &self.categories {
            for word in category.words() {
                *occurrences.entry(word.to_string()).or_insert(0) += category.word_count(word);
            }
        }

        let word_priors: AHashMap<String, f64> = occurrences
            .into_iter()
            .map(|(word, count)| (word, (count as f64 / total_words as f64).ln()))
            .collect();

        for category in &self.categories {
            debug!(
                "Category {}: {} documents, {} words, {} distinct",
                category.label(),
                category.documents(),
                category.total_words(),
                category.distinct_words()
            );
        }

        Ok(BayesClassifier::new(
            self.categories,
            self.index,
            word_priors,
            self.alpha,
        ))
    }
}

impl Default for BayesClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_build_without_categories_fails() {
        let result = BayesClassifierBuilder::new().build();
        assert!(matches!(result, Err(TextBayesError::Config(_))));
    }

    #[test]
    fn test_build_rejects_non_positive_alpha() {
        for alpha in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut builder = BayesClassifierBuilder::new().with_alpha(alpha);
            builder.add_document("a", &words("x"));
            assert!(matches!(builder.build(), Err(TextBayesError::Config(_))));
        }
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let mut builder = BayesClassifierBuilder::new();
        builder.add_document("zeta", &words("z"));
        builder.add_document("alpha", &words("a"));
        builder.add_document("zeta", &words("z z"));
        assert_eq!(builder.category_count(), 2);

        let classifier = builder.build().unwrap();
        let labels: Vec<&str> = classifier.categories().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["zeta", "alpha"]);
        assert_eq!(classifier.category("zeta").unwrap().documents(), 2);
        assert_eq!(classifier.category("zeta").unwrap().total_words(), 3);
    }

    #[test]
    fn test_word_priors_cover_exactly_the_vocabulary() {
        let mut builder = BayesClassifierBuilder::new();
        builder.add_document("spam", &words("buy now"));
        builder.add_document("spam", &words("buy cheap"));
        builder.add_document("ham", &words("hello friend buy"));
        let classifier = builder.build().unwrap();

        assert_eq!(classifier.vocabulary_size(), 5);
        // "buy" occurs 3 times out of 7 words in total.
        let prior = classifier.word_prior("buy").unwrap();
        assert!((prior - (3.0f64 / 7.0).ln()).abs() < 1e-12);
        assert!((classifier.word_prior("friend").unwrap() - (1.0f64 / 7.0).ln()).abs() < 1e-12);
        assert!(classifier.word_prior("unseen").is_none());
    }

    #[test]
    fn test_empty_documents_and_categories_are_tolerated() {
        let mut builder = BayesClassifierBuilder::new();
        builder.add_document("empty", &[]);
        let classifier = builder.build().unwrap();

        assert_eq!(classifier.vocabulary_size(), 0);
        let result = classifier.classify(&words("anything")).unwrap();
        assert_eq!(result.label, "empty");
    }
}
