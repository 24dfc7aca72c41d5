//! Multinomial Naive Bayes text classifier.
//!
//! Training accumulates per-category word histograms in a
//! [`BayesClassifierBuilder`]; [`BayesClassifierBuilder::build`] freezes them
//! into an immutable [`BayesClassifier`] together with one global log-prior
//! per vocabulary word.
//!
//! # Scoring
//!
//! For a document `W`, smoothing constant `α` and `k` categories:
//!
//! ```text
//! score(c) = ln(1/k) + Σ_{w ∈ W, w ∈ V} [ ln((count(w, c) + α) / (total(c) + α·|V|)) − prior(w) ]
//! prior(w) = ln(Σ_c count(w, c) / Σ_c total(c))
//! ```
//!
//! Words outside the training vocabulary `V` are skipped. The reported
//! probability is `exp(score(best))`, a relative score rather than a
//! normalized posterior.
//!
//! # Example
//!
//! ```
//! use textbayes::ml::bayes::BayesClassifierBuilder;
//!
//! let words = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();
//!
//! let mut builder = BayesClassifierBuilder::new();
//! builder.add_document("spam", &words("buy now"));
//! builder.add_document("spam", &words("buy cheap"));
//! builder.add_document("ham", &words("hello friend"));
//! builder.add_document("ham", &words("meeting today"));
//! let classifier = builder.build().unwrap();
//!
//! let result = classifier.classify(&words("buy cheap now")).unwrap();
//! assert_eq!(result.label, "spam");
//! ```

mod builder;
mod category;
mod classifier;

pub use builder::BayesClassifierBuilder;
pub use category::Category;
pub use classifier::{BayesClassifier, Classification};

/// Default additive smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;
