//! k-fold cross-validation of the Naive Bayes classifier.
//!
//! The labeled entries are shuffled with a seeded generator, cut into `k`
//! contiguous blocks, and every block in turn is classified by a model
//! trained from scratch on the other blocks.
//!
//! # Example
//!
//! ```
//! use textbayes::validation::{CrossValidationConfig, CrossValidator};
//!
//! let words = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();
//! let entries = vec![
//!     ("spam".to_string(), words("buy cheap pills now")),
//!     ("spam".to_string(), words("cheap pills buy now")),
//!     ("ham".to_string(), words("meeting moved to friday")),
//!     ("ham".to_string(), words("friday meeting notes")),
//! ];
//!
//! let validator = CrossValidator::new(CrossValidationConfig {
//!     folds: 2,
//!     seed: Some(7),
//!     ..Default::default()
//! });
//! let report = validator
//!     .validate_with(entries, |(label, words)| Ok((label.clone(), words.clone())))
//!     .unwrap();
//!
//! assert_eq!(report.total_validated(), 4);
//! println!("{report}");
//! ```

pub mod folds;
pub mod report;
pub mod shuffle;

mod cross_validator;

pub use cross_validator::{CrossValidationConfig, CrossValidator, DEFAULT_FOLDS};
pub use folds::{Fold, fold_at, partition, validation_range};
pub use report::{CrossValidationReport, FoldResult};
pub use shuffle::shuffle_seeded;
