//! Column-wise standardization.
//!
//! ## Purpose
//!
//! This module rescales every column of a dataset to zero mean and unit
//! variance (z-scores), which is how raw concentration tables are prepared
//! before neighbour search.
//!
//! ## Design notes
//!
//! * **Population moments**: The standard deviation divides by `n`, not `n - 1`.
//! * **All columns**: Targets are standardized along with features.
//! * **Constant columns**: A column with zero spread is centred and left at zero.
//!
//! ## Invariants
//!
//! * Output shape equals input shape; row order is preserved.
//!
//! ## Non-goals
//!
//! * The regression and cross-validation layers never call this implicitly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;

/// Mean and population standard deviation of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats<T> {
    /// Column mean.
    pub mean: T,
    /// Population standard deviation.
    pub std_dev: T,
}

/// Compute mean and population standard deviation for every column.
pub fn column_stats<T: Float>(dataset: &Dataset<T>) -> Vec<ColumnStats<T>> {
    let n_cols = dataset.n_cols();
    let n = T::from(dataset.len()).unwrap_or_else(T::one);

    let mut sums = vec![T::zero(); n_cols];
    for record in dataset.records() {
        for (s, &v) in sums.iter_mut().zip(record.fields()) {
            *s = *s + v;
        }
    }
    let means: Vec<T> = sums.into_iter().map(|s| s / n).collect();

    let mut sq = vec![T::zero(); n_cols];
    for record in dataset.records() {
        for ((acc, &v), &m) in sq.iter_mut().zip(record.fields()).zip(&means) {
            let d = v - m;
            *acc = *acc + d * d;
        }
    }

    means
        .into_iter()
        .zip(sq)
        .map(|(mean, ss)| ColumnStats {
            mean,
            std_dev: (ss / n).sqrt(),
        })
        .collect()
}

/// Return a copy of `dataset` with every column standardized to z-scores.
pub fn standardize<T: Float>(dataset: &Dataset<T>) -> Dataset<T> {
    let stats = column_stats(dataset);
    let n_cols = dataset.n_cols();

    let values: Vec<T> = dataset
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let ColumnStats { mean, std_dev } = stats[i % n_cols];
            let centred = v - mean;
            if std_dev > T::zero() {
                centred / std_dev
            } else {
                T::zero()
            }
        })
        .collect();

    Dataset::from_parts_unchecked(values, n_cols)
}
