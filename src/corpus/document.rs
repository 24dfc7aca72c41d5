//! Documents and labeled entries.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, TextBayesError};

/// A document backed by a file.
///
/// Words are not cached: every call to [`Document::words`] reads the file
/// and runs the analyzer again.
#[derive(Clone)]
pub struct Document {
    path: PathBuf,
    analyzer: Arc<dyn Analyzer>,
}

impl Document {
    /// Create a document for the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P, analyzer: Arc<dyn Analyzer>) -> Self {
        Document {
            path: path.into(),
            analyzer,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and analyze the backing file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, since mail corpora
    /// routinely mix encodings.
    pub fn words(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.path).map_err(|e| {
            TextBayesError::corpus(format!("Cannot read {}: {e}", self.path.display()))
        })?;
        let text = String::from_utf8_lossy(&bytes);
        self.analyzer.words(&text)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("path", &self.path)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// A document paired with its true label.
#[derive(Debug, Clone)]
pub struct LabeledDocument {
    pub label: String,
    pub document: Document,
}

impl LabeledDocument {
    pub fn new<S: Into<String>>(label: S, document: Document) -> Self {
        LabeledDocument {
            label: label.into(),
            document,
        }
    }
}
