//! Per-fold and aggregate cross-validation statistics.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

/// `errors / validated × 100`, or `None` when nothing was validated.
pub fn error_percentage(errors: usize, validated: usize) -> Option<f64> {
    if validated == 0 {
        None
    } else {
        Some(errors as f64 / validated as f64 * 100.0)
    }
}

fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Statistics of one fold, or of all folds together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldResult {
    /// Zero-based fold number; `None` for totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold: Option<usize>,
    /// Misclassified validation documents.
    pub errors: usize,
    /// Validation documents classified.
    pub validated: usize,
    /// Error percentage; `None` means "no data".
    pub error_rate: Option<f64>,
    #[serde(rename = "training_ms", serialize_with = "serialize_millis")]
    pub training_time: Duration,
    #[serde(rename = "validation_ms", serialize_with = "serialize_millis")]
    pub validation_time: Duration,
}

impl FoldResult {
    pub fn new(
        fold: usize,
        errors: usize,
        validated: usize,
        training_time: Duration,
        validation_time: Duration,
    ) -> Self {
        FoldResult {
            fold: Some(fold),
            errors,
            validated,
            error_rate: error_percentage(errors, validated),
            training_time,
            validation_time,
        }
    }

    /// Sum fold results. An empty fold adds nothing to the counts.
    pub fn total<'a, I: IntoIterator<Item = &'a FoldResult>>(results: I) -> Self {
        let mut errors = 0;
        let mut validated = 0;
        let mut training_time = Duration::ZERO;
        let mut validation_time = Duration::ZERO;
        for result in results {
            errors += result.errors;
            validated += result.validated;
            training_time += result.training_time;
            validation_time += result.validation_time;
        }

        FoldResult {
            fold: None,
            errors,
            validated,
            error_rate: error_percentage(errors, validated),
            training_time,
            validation_time,
        }
    }
}

impl fmt::Display for FoldResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errors: {}/{} ", self.errors, self.validated)?;
        match self.error_rate {
            Some(rate) => write!(f, "({rate:.1} %)")?,
            None => write!(f, "(no data)")?,
        }
        write!(
            f,
            " (training {} ms, validation {} ms)",
            self.training_time.as_millis(),
            self.validation_time.as_millis()
        )
    }
}

/// Outcome of a complete cross-validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossValidationReport {
    /// Number of labeled documents in the corpus.
    pub documents: usize,
    /// Number of folds.
    pub folds: usize,
    /// Seed of the shuffle; rerunning with it reproduces the folds.
    pub seed: u64,
    pub fold_results: Vec<FoldResult>,
    pub total: FoldResult,
}

impl CrossValidationReport {
    pub fn new(documents: usize, seed: u64, fold_results: Vec<FoldResult>) -> Self {
        let total = FoldResult::total(&fold_results);
        CrossValidationReport {
            documents,
            folds: fold_results.len(),
            seed,
            fold_results,
            total,
        }
    }

    pub fn total_errors(&self) -> usize {
        self.total.errors
    }

    pub fn total_validated(&self) -> usize {
        self.total.validated
    }

    /// Overall error percentage across all folds; `None` for an empty corpus.
    pub fn total_error_rate(&self) -> Option<f64> {
        self.total.error_rate
    }

    pub fn total_training_time(&self) -> Duration {
        self.total.training_time
    }

    pub fn total_validation_time(&self) -> Duration {
        self.total.validation_time
    }
}

impl fmt::Display for CrossValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Performing {}-fold cross-validation for {} documents of corpus (seed {})",
            self.folds, self.documents, self.seed
        )?;
        for result in &self.fold_results {
            writeln!(f, "{result}")?;
        }
        write!(f, "Total {}", self.total)
    }
}
