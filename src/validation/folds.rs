//! Fold partitioning.
//!
//! `N` items are cut into exactly `k` contiguous blocks of `ceil(N / k)`
//! items each. Trailing blocks may be shorter or, when `k` does not fit
//! `N`, empty. Fold `i` validates on block `i` and trains on every other
//! block in original order.

use std::ops::Range;

use crate::error::{Result, TextBayesError};

/// One train/validate split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold<T> {
    /// Zero-based fold number.
    pub index: usize,
    /// All items outside the validation block, in original order.
    pub training: Vec<T>,
    /// The validation block.
    pub validation: Vec<T>,
}

/// Size of every block but possibly the trailing ones: `ceil(len / folds)`.
pub fn block_size(len: usize, folds: usize) -> usize {
    len.div_ceil(folds)
}

/// Index range of the validation block of fold `index`. Empty for the
/// trailing folds when `folds` does not fit `len`.
pub fn validation_range(len: usize, folds: usize, index: usize) -> Range<usize> {
    let size = block_size(len, folds);
    let start = index.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// Build fold `index` of `folds`.
pub fn fold_at<T: Clone>(items: &[T], folds: usize, index: usize) -> Fold<T> {
    let range = validation_range(items.len(), folds, index);

    let mut training = Vec::with_capacity(items.len() - range.len());
    training.extend_from_slice(&items[..range.start]);
    training.extend_from_slice(&items[range.end..]);

    Fold {
        index,
        training,
        validation: items[range].to_vec(),
    }
}

/// Split `items` into exactly `folds` folds.
pub fn partition<T: Clone>(items: &[T], folds: usize) -> Result<Vec<Fold<T>>> {
    if folds == 0 {
        return Err(TextBayesError::config("fold count must be at least 1"));
    }

    Ok((0..folds).map(|index| fold_at(items, folds, index)).collect())
}
