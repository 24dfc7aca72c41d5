//! Immutable trained model and scoring.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::builder::BayesClassifierBuilder;
use super::category::Category;
use crate::error::Result;

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The most likely category.
    pub label: String,
    /// `exp(log_score)`. Not normalized over categories, and it underflows
    /// to zero for long documents; compare `log_score` when magnitudes matter.
    pub probability: f64,
    /// Log-score of the winning category.
    pub log_score: f64,
}

/// A trained multinomial Naive Bayes model.
#[derive(Debug, Clone)]
pub struct BayesClassifier {
    categories: Vec<Category>,
    index: AHashMap<String, usize>,
    word_priors: AHashMap<String, f64>,
    alpha: f64,
}

impl BayesClassifier {
    pub(super) fn new(
        categories: Vec<Category>,
        index: AHashMap<String, usize>,
        word_priors: AHashMap<String, f64>,
        alpha: f64,
    ) -> Self {
        BayesClassifier {
            categories,
            index,
            word_priors,
            alpha,
        }
    }

    /// Train a classifier from (label, words) pairs with the default smoothing.
    pub fn train<I, S, W>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, W)>,
        S: AsRef<str>,
        W: AsRef<[String]>,
    {
        let mut builder = BayesClassifierBuilder::new();
        for (label, words) in documents {
            builder.add_document(label.as_ref(), words.as_ref());
        }
        builder.build()
    }

    /// Log-score of every category for `words`, in category order.
    pub fn log_scores(&self, words: &[String]) -> Vec<(&str, f64)> {
        let prior = (1.0 / self.categories.len() as f64).ln();
        let vocabulary_size = self.word_priors.len() as f64;

        self.categories
            .iter()
            .map(|category| {
                let denominator = category.total_words() as f64 + self.alpha * vocabulary_size;
                let score = words
                    .iter()
                    .filter_map(|word| {
                        let word_prior = self.word_priors.get(word.as_str())?;
                        let numerator = category.word_count(word) as f64 + self.alpha;
                        Some((numerator / denominator).ln() - word_prior)
                    })
                    .fold(prior, |total, term| total + term);
                (category.label(), score)
            })
            .collect()
    }

    /// Pick the best category for `words`.
    ///
    /// Ties go to the category that was seen first during training.
    pub fn classify(&self, words: &[String]) -> Option<Classification> {
        let mut best: Option<(&str, f64)> = None;
        for (label, score) in self.log_scores(words) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((label, score)),
            }
        }

        best.map(|(label, log_score)| Classification {
            label: label.to_string(),
            probability: log_score.exp(),
            log_score,
        })
    }

    /// Categories in first-seen training order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by label.
    pub fn category(&self, label: &str) -> Option<&Category> {
        self.index.get(label).map(|&position| &self.categories[position])
    }

    /// Number of distinct words seen during training.
    pub fn vocabulary_size(&self) -> usize {
        self.word_priors.len()
    }

    /// Global log-prior of `word`, `None` outside the vocabulary.
    pub fn word_prior(&self, word: &str) -> Option<f64> {
        self.word_priors.get(word).copied()
    }

    /// The additive smoothing constant.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn spam_ham() -> BayesClassifier {
        BayesClassifier::train([
            ("spam", words("buy now")),
            ("spam", words("buy cheap")),
            ("ham", words("hello friend")),
            ("ham", words("meeting today")),
        ])
        .unwrap()
    }

    #[test]
    fn test_spam_scenario() {
        let classifier = spam_ham();
        let result = classifier.classify(&words("buy cheap now")).unwrap();
        assert_eq!(result.label, "spam");

        let result = classifier.classify(&words("hello meeting")).unwrap();
        assert_eq!(result.label, "ham");
    }

    #[test]
    fn test_scores_match_formula() {
        let classifier = spam_ham();
        // |V| = 7, both categories hold 4 words, prior(buy) = ln(2/8).
        // spam: ln(1/2) + ln(3/11) - ln(2/8) = ln(6/11)
        // ham:  ln(1/2) + ln(1/11) - ln(2/8) = ln(2/11)
        let scores = classifier.log_scores(&words("buy"));
        assert_eq!(scores[0].0, "spam");
        assert!((scores[0].1 - (6.0f64 / 11.0).ln()).abs() < 1e-12);
        assert_eq!(scores[1].0, "ham");
        assert!((scores[1].1 - (2.0f64 / 11.0).ln()).abs() < 1e-12);

        let result = classifier.classify(&words("buy")).unwrap();
        assert!((result.probability - 6.0 / 11.0).abs() < 1e-12);
        assert_eq!(result.probability, result.log_score.exp());
    }

    #[test]
    fn test_probability_is_not_normalized() {
        let classifier = spam_ham();
        let scores = classifier.log_scores(&words("buy cheap now"));
        let total: f64 = scores.iter().map(|(_, score)| score.exp()).sum();
        assert!((total - 1.0).abs() > 1e-6);
    }

    #[test]
    fn test_unknown_words_fall_back_to_prior() {
        let classifier = spam_ham();
        let scores = classifier.log_scores(&words("zebra quantum"));
        for (_, score) in &scores {
            assert!((score - 0.5f64.ln()).abs() < 1e-12);
        }

        // All scores tie, so the first-seen category wins.
        let result = classifier.classify(&words("zebra quantum")).unwrap();
        assert_eq!(result.label, "spam");
        assert!((result.probability - 0.5).abs() < 1e-12);

        let result = classifier.classify(&[]).unwrap();
        assert_eq!(result.label, "spam");
    }

    #[test]
    fn test_mixed_unknown_words_are_skipped() {
        let classifier = spam_ham();
        let with_noise = classifier.log_scores(&words("zebra buy quantum"));
        let without = classifier.log_scores(&words("buy"));
        assert_eq!(with_noise, without);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = spam_ham();
        let document = words("buy friend today now");
        let first = classifier.classify(&document).unwrap();
        for _ in 0..10 {
            assert_eq!(classifier.classify(&document).unwrap(), first);
        }
    }

    #[test]
    fn test_custom_alpha() {
        let mut builder = BayesClassifierBuilder::new().with_alpha(0.5);
        builder.add_document("a", &words("x x"));
        builder.add_document("b", &words("y"));
        let classifier = builder.build().unwrap();
        assert_eq!(classifier.alpha(), 0.5);

        // a: ln(1/2) + ln((2 + 0.5) / (2 + 0.5 * 2)) - ln(2/3)
        let expected = 0.5f64.ln() + (2.5f64 / 3.0).ln() - (2.0f64 / 3.0).ln();
        let scores = classifier.log_scores(&words("x"));
        assert!((scores[0].1 - expected).abs() < 1e-12);
    }
}
