//! Per-category training statistics.

use ahash::AHashMap;

/// A training label together with its accumulated word statistics.
#[derive(Debug, Clone)]
pub struct Category {
    label: String,
    histogram: AHashMap<String, usize>,
    documents: usize,
    total_words: usize,
}

impl Category {
    pub(crate) fn new<S: Into<String>>(label: S) -> Self {
        Category {
            label: label.into(),
            histogram: AHashMap::new(),
            documents: 0,
            total_words: 0,
        }
    }

    /// Count one document's words into the histogram.
    pub(crate) fn add_document(&mut self, words: &[String]) {
        self.documents += 1;
        self.total_words += words.len();
        for word in words {
            *self.histogram.entry(word.clone()).or_insert(0) += 1;
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of documents added to this category.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Sum of the lengths of all documents added to this category.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Occurrences of `word` in this category, zero if never seen.
    pub fn word_count(&self, word: &str) -> usize {
        self.histogram.get(word).copied().unwrap_or(0)
    }

    /// Distinct words seen in this category.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.histogram.keys().map(String::as_str)
    }

    /// Number of distinct words seen in this category.
    pub fn distinct_words(&self) -> usize {
        self.histogram.len()
    }
}
