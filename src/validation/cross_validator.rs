//! The cross-validation driver.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::folds::{fold_at, validation_range};
use super::report::{CrossValidationReport, FoldResult};
use super::shuffle::{random_seed, shuffle_seeded};
use crate::analysis::analyzer::Analyzer;
use crate::corpus::{FileFilter, LabeledDocument, flatten, read_corpora};
use crate::error::{Result, TextBayesError};
use crate::ml::bayes::{BayesClassifierBuilder, DEFAULT_ALPHA};

/// Default number of folds.
pub const DEFAULT_FOLDS: usize = 5;

/// Cross-validation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossValidationConfig {
    /// Number of folds (at least 2).
    pub folds: usize,
    /// Shuffle seed; a random seed is drawn and reported when unset.
    pub seed: Option<u64>,
    /// Additive smoothing constant of every trained model.
    pub alpha: f64,
    /// Evaluate folds on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CrossValidationConfig {
    fn default() -> Self {
        CrossValidationConfig {
            folds: DEFAULT_FOLDS,
            seed: None,
            alpha: DEFAULT_ALPHA,
            parallel: false,
        }
    }
}

/// Runs k-fold cross-validation.
#[derive(Debug, Clone, Default)]
pub struct CrossValidator {
    config: CrossValidationConfig,
}

impl CrossValidator {
    pub fn new(config: CrossValidationConfig) -> Self {
        CrossValidator { config }
    }

    pub fn config(&self) -> &CrossValidationConfig {
        &self.config
    }

    /// Load the corpus of every label from disk and cross-validate it.
    pub fn run(
        &self,
        roots: &BTreeMap<String, PathBuf>,
        analyzer: Arc<dyn Analyzer>,
        filter: Arc<dyn FileFilter>,
    ) -> Result<CrossValidationReport> {
        let corpora = read_corpora(roots, analyzer, filter)?;
        for (label, documents) in &corpora {
            info!("Corpus {label}: {} documents", documents.len());
        }
        self.validate(flatten(corpora))
    }

    /// Cross-validate file-backed documents.
    pub fn validate(&self, entries: Vec<LabeledDocument>) -> Result<CrossValidationReport> {
        self.validate_with(entries, |entry| {
            Ok((entry.label.clone(), entry.document.words()?))
        })
    }

    /// Cross-validate arbitrary entries; `words_of` yields the true label and
    /// the words of an entry and is called every time an entry is used.
    pub fn validate_with<T, F>(
        &self,
        mut entries: Vec<T>,
        words_of: F,
    ) -> Result<CrossValidationReport>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> Result<(String, Vec<String>)> + Sync,
    {
        let folds = self.config.folds;
        if folds < 2 {
            return Err(TextBayesError::config(format!(
                "cross-validation needs at least 2 folds, got {folds}"
            )));
        }
        if entries.is_empty() {
            return Err(TextBayesError::config("no documents to cross-validate"));
        }
        if folds > entries.len() {
            warn!(
                "{folds} folds for {} documents: some validation sets will be empty",
                entries.len()
            );
        }

        let seed = self.config.seed.unwrap_or_else(random_seed);
        shuffle_seeded(&mut entries, seed);
        info!(
            "Performing {folds}-fold cross-validation for {} documents (seed {seed})",
            entries.len()
        );

        let fold_results = if self.config.parallel {
            (0..folds)
                .into_par_iter()
                .map(|index| self.evaluate_fold(&entries, index, &words_of))
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..folds)
                .map(|index| self.evaluate_fold(&entries, index, &words_of))
                .collect::<Result<Vec<_>>>()?
        };

        let report = CrossValidationReport::new(entries.len(), seed, fold_results);
        info!("Total {}", report.total);
        Ok(report)
    }

    /// Train and validate fold `index`. A fold without validation
    /// documents is reported as empty without training a model.
    fn evaluate_fold<T, F>(&self, entries: &[T], index: usize, words_of: &F) -> Result<FoldResult>
    where
        T: Clone,
        F: Fn(&T) -> Result<(String, Vec<String>)>,
    {
        if validation_range(entries.len(), self.config.folds, index).is_empty() {
            debug!("Fold {index} has an empty validation set");
            return Ok(FoldResult::new(index, 0, 0, Duration::ZERO, Duration::ZERO));
        }

        let fold = fold_at(entries, self.config.folds, index);
        if fold.training.is_empty() {
            return Err(TextBayesError::config(format!(
                "fold {index} has no training documents"
            )));
        }

        let started = Instant::now();
        let mut builder = BayesClassifierBuilder::new().with_alpha(self.config.alpha);
        for entry in &fold.training {
            let (label, words) = words_of(entry)?;
            builder.add_document(&label, &words);
        }
        let classifier = builder.build()?;
        let training_time = started.elapsed();

        let started = Instant::now();
        let mut errors = 0;
        for entry in &fold.validation {
            let (label, words) = words_of(entry)?;
            let predicted = classifier.classify(&words);
            if predicted.is_none_or(|classification| classification.label != label) {
                errors += 1;
            }
        }
        let validation_time = started.elapsed();

        let result = FoldResult::new(
            fold.index,
            errors,
            fold.validation.len(),
            training_time,
            validation_time,
        );
        info!("Fold {}: {result}", fold.index);
        Ok(result)
    }
}
