//! Error types for textbayes.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`TextBayesError`] enum. An evaluation run has no recovery path:
//! the first error aborts the run and is reported to the user.
//!
//! # Examples
//!
//! ```
//! use textbayes::error::{Result, TextBayesError};
//!
//! fn check_folds(folds: usize) -> Result<()> {
//!     if folds < 2 {
//!         return Err(TextBayesError::config("fold count must be at least 2"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_folds(1).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textbayes operations.
#[derive(Error, Debug)]
pub enum TextBayesError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, dictionaries, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus loading errors (missing roots, unreadable documents)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors (no categories, invalid fold count, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TextBayesError.
pub type Result<T> = std::result::Result<T, TextBayesError>;

impl TextBayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Corpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextBayesError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = TextBayesError::corpus("missing root");
        assert_eq!(error.to_string(), "Corpus error: missing root");

        let error = TextBayesError::config("no categories");
        assert_eq!(error.to_string(), "Configuration error: no categories");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TextBayesError::from(io_error);

        match error {
            TextBayesError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        fn parse(content: &str) -> Result<Vec<String>> {
            Ok(serde_json::from_str(content)?)
        }

        let error = parse("{not json").unwrap_err();
        assert!(matches!(error, TextBayesError::Json(_)));
        assert!(error.to_string().starts_with("JSON error: "));
    }
}
