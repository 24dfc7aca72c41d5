//! Suffix-stripping lemmatizer.

use super::Lemmatizer;

/// Rule-based lemmatizer that removes common suffixes.
///
/// Suffixes are tried longest first and the remaining stem must keep at
/// least three characters. Words no suffix applies to have no base form.
#[derive(Debug, Clone)]
pub struct SuffixLemmatizer {
    /// Suffixes to remove, longest first.
    suffixes: Vec<String>,
}

impl SuffixLemmatizer {
    /// Create a lemmatizer with common English suffixes.
    pub fn new() -> Self {
        Self::with_suffixes(
            [
                "ing", "ed", "er", "est", "ly", "s", "es", "ies", "ied", "tion", "sion", "able",
                "ible", "ment", "ness", "ful",
            ]
            .map(String::from)
            .to_vec(),
        )
    }

    /// Create a lemmatizer with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.retain(|suffix| !suffix.is_empty());
        suffixes.sort_by_key(|suffix| std::cmp::Reverse(suffix.chars().count()));
        SuffixLemmatizer { suffixes }
    }

    /// The configured suffixes, longest first.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn base_forms(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let length = word.chars().count();

        self.suffixes
            .iter()
            .find(|suffix| length >= suffix.chars().count() + 3 && word.ends_with(suffix.as_str()))
            .map(|suffix| vec![word[..word.len() - suffix.len()].to_string()])
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
