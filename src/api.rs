//! High-level API for k-NN cross-validation sweeps.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring a sweep and a built `KnnSweep` that runs
//! it or any of its single steps.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Operations are generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KnnBuilder`] via `Knn::new()`.
//! 2. Chain configuration methods (`.neighbours()`, `.hold_outs()`, etc.).
//! 3. Call `.build()` to obtain a [`KnnSweep`].
//! 4. Call `.run(&dataset)` to obtain a [`ScoreTable`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SweepExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::{regress, Regressor, Weighting};
pub use crate::engine::executor::{DEFAULT_HOLD_OUTS, DEFAULT_NEIGHBOURS};
pub use crate::engine::output::{DegenerateScore, ScoreTable, DEFAULT_LABELS};
pub use crate::engine::executor::SweepConfig;
pub use crate::evaluation::concordance::{c_index, is_degenerate, PairCounts};
pub use crate::evaluation::cv::{validate, CrossValidator};
pub use crate::math::distance::DistanceMetric;
pub use crate::math::neighborhood::{find_neighbours, Neighbour, NeighbourSearch};
pub use crate::math::scaling::{column_stats, standardize, ColumnStats};
pub use crate::primitives::dataset::{Dataset, PredictionMatrix, Record, TARGETS};
pub use crate::primitives::errors::KnnError;
pub use crate::primitives::buffer::{CandidateBuffer, Ranked};
pub use crate::primitives::partition::Folds;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a k-NN cross-validation sweep.
#[derive(Debug, Clone, Default)]
pub struct KnnBuilder {
    /// Candidate neighbour counts.
    pub neighbours: Option<Vec<usize>>,

    /// Hold-out sizes (one panel each).
    pub hold_outs: Option<Vec<usize>>,

    /// Distance metric for neighbour search.
    pub distance_metric: Option<DistanceMetric>,

    /// Neighbour weighting for regression.
    pub weighting: Option<Weighting>,

    /// Target labels for reporting.
    pub target_labels: Option<[&'static str; TARGETS]>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl KnnBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate neighbour counts.
    pub fn neighbours(mut self, ks: &[usize]) -> Self {
        if self.neighbours.is_some() {
            self.duplicate_param = Some("neighbours");
        }
        self.neighbours = Some(ks.to_vec());
        self
    }

    /// Set the hold-out sizes.
    pub fn hold_outs(mut self, sizes: &[usize]) -> Self {
        if self.hold_outs.is_some() {
            self.duplicate_param = Some("hold_outs");
        }
        self.hold_outs = Some(sizes.to_vec());
        self
    }

    /// Set the distance metric.
    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        if self.distance_metric.is_some() {
            self.duplicate_param = Some("distance_metric");
        }
        self.distance_metric = Some(metric);
        self
    }

    /// Set the neighbour weighting.
    pub fn weighting(mut self, weighting: Weighting) -> Self {
        if self.weighting.is_some() {
            self.duplicate_param = Some("weighting");
        }
        self.weighting = Some(weighting);
        self
    }

    /// Set the labels of the three targets.
    pub fn target_labels(mut self, labels: [&'static str; TARGETS]) -> Self {
        if self.target_labels.is_some() {
            self.duplicate_param = Some("target_labels");
        }
        self.target_labels = Some(labels);
        self
    }

    /// Run sweep combinations in parallel (requires the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the sweep.
    pub fn build(self) -> Result<KnnSweep, KnnError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = SweepConfig::default();
        let config = SweepConfig {
            ks: self.neighbours.unwrap_or(defaults.ks),
            hold_outs: self.hold_outs.unwrap_or(defaults.hold_outs),
            metric: self.distance_metric.unwrap_or(defaults.metric),
            weighting: self.weighting.unwrap_or(defaults.weighting),
            labels: self.target_labels.unwrap_or(defaults.labels),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };

        Validator::validate_neighbour_list(&config.ks)?;
        Validator::validate_hold_outs(&config.hold_outs)?;

        Ok(KnnSweep { config })
    }
}

// ============================================================================
// Sweep
// ============================================================================

/// A validated sweep configuration, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnnSweep {
    config: SweepConfig,
}

impl KnnSweep {
    /// The resolved configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run every `(k, hold-out)` combination on `dataset`.
    pub fn run<T>(&self, dataset: &Dataset<T>) -> Result<ScoreTable<T>, KnnError>
    where
        T: Float + Send + Sync,
    {
        SweepExecutor::run(dataset, &self.config)
    }

    /// Predict the targets of `query` from its `k` nearest records in `training`.
    pub fn predict<T: Float>(
        &self,
        training: &Dataset<T>,
        query: Record<'_, T>,
        k: usize,
    ) -> Result<[T; TARGETS], KnnError> {
        let neighbours =
            NeighbourSearch::new(self.config.metric).search(training.records(), query, k)?;
        Regressor::new(self.config.weighting).regress(&neighbours)
    }

    /// Cross-validate `dataset` with `k` neighbours and folds of `leave_out` records.
    pub fn cross_validate<T: Float>(
        &self,
        dataset: &Dataset<T>,
        k: usize,
        leave_out: usize,
    ) -> Result<PredictionMatrix<T>, KnnError> {
        self.config.validator(k, leave_out).validate(dataset)
    }

    /// Score `pred` against the targets of `dataset`.
    pub fn score<T: Float>(
        &self,
        dataset: &Dataset<T>,
        pred: &[[T; TARGETS]],
    ) -> Result<[T; TARGETS], KnnError> {
        c_index(&dataset.targets(), pred)
    }
}
