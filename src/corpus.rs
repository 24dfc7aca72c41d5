//! Labeled document corpora backed by directories on disk.
//!
//! A corpus is every file under a root directory (recursively) that passes a
//! [`FileFilter`]. Each label of an evaluation has its own corpus root.
//!
//! # Examples
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use textbayes::analysis::analyzer::SimpleAnalyzer;
//! use textbayes::corpus::{AcceptAll, read_corpora};
//!
//! let roots = BTreeMap::from([
//!     ("ham".to_string(), PathBuf::from("data/enron1/ham")),
//!     ("spam".to_string(), PathBuf::from("data/enron1/spam")),
//! ]);
//! let corpora = read_corpora(&roots, Arc::new(SimpleAnalyzer::new()), Arc::new(AcceptAll)).unwrap();
//! println!("{} ham documents", corpora["ham"].len());
//! ```

mod document;
mod filter;
mod loader;

pub use document::{Document, LabeledDocument};
pub use filter::{AcceptAll, ExtensionFilter, FileFilter};
pub use loader::{flatten, read_corpora, read_corpus};
