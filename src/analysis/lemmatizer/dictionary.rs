//! Dictionary-backed lemmatizer.
//!
//! Two on-disk formats are understood:
//!
//! - JSON: an object mapping each word to an array of base forms,
//!   `{"talot": ["talo"], "kuusi": ["kuusi", "kuu"]}`
//! - TSV: one word per line followed by its base forms, tab separated,
//!   `talot\ttalo`. Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ahash::AHashMap;

use super::Lemmatizer;
use crate::error::{Result, TextBayesError};

/// Lemmatizer that looks words up in a word → base forms table.
///
/// Lookups try the word as given first and then its lowercase form.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    entries: AHashMap<String, Vec<String>>,
}

impl DictionaryLemmatizer {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from in-memory entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, forms)| (word.into(), forms.into_iter().map(Into::into).collect()))
            .collect();
        DictionaryLemmatizer { entries }
    }

    /// Load a dictionary file, choosing the format from its extension
    /// (`.json` is JSON, anything else is TSV).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextBayesError::analysis(format!(
                "Cannot read dictionary {}: {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let dictionary = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_tsv(&content)?
        };
        log::debug!(
            "Loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse the JSON dictionary format.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
        Ok(DictionaryLemmatizer {
            entries: entries.into_iter().collect(),
        })
    }

    /// Parse the TSV dictionary format.
    pub fn from_tsv(content: &str) -> Result<Self> {
        let mut entries = AHashMap::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t').map(str::trim);
            let word = fields.next().unwrap_or_default();
            let forms: Vec<String> = fields
                .filter(|form| !form.is_empty())
                .map(str::to_string)
                .collect();
            if word.is_empty() || forms.is_empty() {
                return Err(TextBayesError::analysis(format!(
                    "Dictionary line {} has no base form: {line:?}",
                    line_num + 1
                )));
            }
            entries.insert(word.to_string(), forms);
        }
        Ok(DictionaryLemmatizer { entries })
    }

    /// Add or replace the base forms of a word.
    pub fn insert<S: Into<String>>(&mut self, word: S, forms: Vec<String>) {
        self.entries.insert(word.into(), forms);
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn base_forms(&self, word: &str) -> Vec<String> {
        if let Some(forms) = self.entries.get(word) {
            return forms.clone();
        }
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
