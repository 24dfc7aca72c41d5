//! # textbayes
//!
//! Multinomial Naive Bayes text classification, evaluated with k-fold
//! cross-validation over labeled document corpora.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Global word log-priors and per-category word histograms
//! - Additive (Laplace-style) smoothing
//! - Pluggable text analysis (regex splitting, base-form reduction)
//! - Seeded, reproducible fold construction
//! - Optional parallel fold evaluation

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ml;
pub mod validation;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, BaseFormAnalyzer, SimpleAnalyzer};
    pub use crate::corpus::{Document, LabeledDocument, read_corpora};
    pub use crate::error::{Result, TextBayesError};
    pub use crate::ml::bayes::{BayesClassifier, BayesClassifierBuilder, Classification};
    pub use crate::validation::{CrossValidationConfig, CrossValidationReport, CrossValidator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
