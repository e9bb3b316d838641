//! Leave-p-out cross-validation for k-NN regression.
//!
//! ## Purpose
//!
//! This module predicts every record of a dataset from the records outside
//! its fold, producing a prediction matrix aligned with the dataset.
//!
//! ## Design notes
//!
//! * **Sequential folds**: Folds are contiguous blocks of `leave_out`
//!   records taken left to right (see `primitives::partition`).
//! * **Zero-copy training set**: The training partition is the chain of the
//!   records before and after the fold; nothing is gathered into a new matrix.
//! * **Buffer reuse**: One candidate buffer serves every query of the run.
//!
//! ## Key concepts
//!
//! * **Fold**: `[start, min(start + leave_out, n))`, the test partition.
//! * **Training partition**: `dataset[0..start] ++ dataset[end..n]`, in order.
//!
//! ## Invariants
//!
//! * Training and test sets are disjoint in each fold.
//! * Output length equals dataset length and follows dataset order.
//!
//! ## Non-goals
//!
//! * This module does not score predictions (see `evaluation::concordance`).
//! * This module does not shuffle records.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{Regressor, Weighting};
use crate::math::distance::DistanceMetric;
use crate::math::neighborhood::NeighbourSearch;
use crate::primitives::buffer::CandidateBuffer;
use crate::primitives::dataset::{Dataset, PredictionMatrix};
use crate::primitives::errors::KnnError;
use crate::primitives::partition::Folds;

// ============================================================================
// Cross-Validator
// ============================================================================

/// Leave-p-out cross-validator for a fixed `k` and hold-out size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossValidator {
    k: usize,
    leave_out: usize,
    search: NeighbourSearch,
    regressor: Regressor,
}

impl CrossValidator {
    /// Create a validator using `k` neighbours and folds of `leave_out` records.
    pub fn new(k: usize, leave_out: usize) -> Self {
        Self {
            k,
            leave_out,
            search: NeighbourSearch::default(),
            regressor: Regressor::default(),
        }
    }

    /// Set the distance metric used for neighbour search.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.search = NeighbourSearch::new(metric);
        self
    }

    /// Set the neighbour weighting used for regression.
    pub fn weighting(mut self, weighting: Weighting) -> Self {
        self.regressor = Regressor::new(weighting);
        self
    }

    /// Number of neighbours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Hold-out size of each fold.
    pub fn leave_out(&self) -> usize {
        self.leave_out
    }

    /// The folds this validator would use on a dataset of `n` records.
    pub fn folds(&self, n: usize) -> Folds {
        Folds::new(n, self.leave_out)
    }

    /// Predict every record of `dataset` from the records outside its fold.
    pub fn validate<T: Float>(
        &self,
        dataset: &Dataset<T>,
    ) -> Result<PredictionMatrix<T>, KnnError> {
        if self.k == 0 {
            return Err(KnnError::InvalidNeighbours(self.k));
        }
        if self.leave_out == 0 {
            return Err(KnnError::InvalidLeaveOut(self.leave_out));
        }

        let n = dataset.len();
        let mut predictions = Vec::with_capacity(n);
        let mut candidates = CandidateBuffer::new(self.k);

        for fold in self.folds(n) {
            for i in fold.clone() {
                let training = dataset
                    .records_in(0..fold.start)
                    .chain(dataset.records_in(fold.end..n));
                self.search
                    .search_into(training, dataset.record(i), self.k, &mut candidates)?;
                predictions.push(self.regressor.regress(candidates.as_slice())?);
            }
        }

        debug_assert_eq!(predictions.len(), n);
        Ok(predictions)
    }
}

/// Cross-validate `dataset` with Euclidean distance and uniform weighting.
pub fn validate<T: Float>(
    dataset: &Dataset<T>,
    k: usize,
    leave_out: usize,
) -> Result<PredictionMatrix<T>, KnnError> {
    CrossValidator::new(k, leave_out).validate(dataset)
}
