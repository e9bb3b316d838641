//! Execution engine for cross-validation sweeps.
//!
//! ## Purpose
//!
//! This module runs the full pipeline for every `(k, hold-out size)`
//! combination of a sweep: cross-validate, score the held-out predictions
//! against the dataset's own targets, and place the c-index vector in its
//! `ScoreTable` slot.
//!
//! ## Design notes
//!
//! * **Pure**: A sweep is a function of the dataset and the configuration.
//! * **Fixed slots**: Each combination owns one slot, so sequential and
//!   parallel runs produce identical tables.
//! * **Abort on failure**: The first error ends the sweep; no partial table is returned.
//! * **Parallel**: With the `parallel` feature, combinations run on rayon.
//!
//! ## Key concepts
//!
//! * **Combination**: One `(k, hold_out)` pair.
//! * **Panel**: All combinations sharing one hold-out size.
//!
//! ## Invariants
//!
//! * Slot order is hold-out major, then k, matching the configuration order.
//!
//! ## Non-goals
//!
//! * This module does not validate the configuration (handled by `validator`).
//! * This module does not render results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::Weighting;
use crate::engine::output::{ScoreTable, DEFAULT_LABELS};
use crate::evaluation::concordance::c_index;
use crate::evaluation::cv::CrossValidator;
use crate::math::distance::DistanceMetric;
use crate::primitives::dataset::{Dataset, TARGETS};
use crate::primitives::errors::KnnError;

/// Neighbour counts swept by default.
pub const DEFAULT_NEIGHBOURS: [usize; 11] = [1, 2, 3, 4, 5, 6, 8, 10, 15, 20, 30];

/// Hold-out sizes swept by default.
pub const DEFAULT_HOLD_OUTS: [usize; 2] = [1, 4];

// ============================================================================
// Configuration
// ============================================================================

/// Resolved sweep configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Candidate neighbour counts.
    pub ks: Vec<usize>,
    /// Hold-out sizes.
    pub hold_outs: Vec<usize>,
    /// Distance metric for neighbour search.
    pub metric: DistanceMetric,
    /// Neighbour weighting for regression.
    pub weighting: Weighting,
    /// Target labels for reporting.
    pub labels: [&'static str; TARGETS],
    /// Run combinations in parallel when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ks: DEFAULT_NEIGHBOURS.to_vec(),
            hold_outs: DEFAULT_HOLD_OUTS.to_vec(),
            metric: DistanceMetric::default(),
            weighting: Weighting::default(),
            labels: DEFAULT_LABELS,
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// Cross-validator for one combination.
    pub fn validator(&self, k: usize, hold_out: usize) -> CrossValidator {
        CrossValidator::new(k, hold_out)
            .metric(self.metric)
            .weighting(self.weighting)
    }

    /// All combinations in slot order.
    fn combinations(&self) -> Vec<(usize, usize)> {
        self.hold_outs
            .iter()
            .flat_map(|&h| self.ks.iter().map(move |&k| (k, h)))
            .collect()
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs sweeps.
pub struct SweepExecutor;

impl SweepExecutor {
    /// Run every combination of `config` on `dataset`.
    pub fn run<T>(dataset: &Dataset<T>, config: &SweepConfig) -> Result<ScoreTable<T>, KnnError>
    where
        T: Float + Send + Sync,
    {
        let combos = config.combinations();
        log::info!(
            "sweeping {} neighbour counts x {} hold-out sizes over {} records",
            config.ks.len(),
            config.hold_outs.len(),
            dataset.len()
        );

        let scores = Self::score_all(dataset, config, &combos)?;

        let table = ScoreTable::new(
            config.ks.clone(),
            config.hold_outs.clone(),
            config.labels,
            dataset.len(),
            scores,
        );

        for d in table.degenerate() {
            log::warn!(
                "c-index undefined for {} (k={}, hold_out={}): no comparable pairs",
                config.labels[d.dimension],
                d.k,
                d.hold_out
            );
        }

        Ok(table)
    }

    /// Cross-validate and score one combination.
    pub fn evaluate<T: Float>(
        dataset: &Dataset<T>,
        config: &SweepConfig,
        k: usize,
        hold_out: usize,
    ) -> Result<[T; TARGETS], KnnError> {
        let available = dataset.len().saturating_sub(hold_out);
        if k > available {
            log::warn!(
                "k={} exceeds the {} training records left by hold_out={}; using fewer neighbours",
                k,
                available,
                hold_out
            );
        }

        let predictions = config.validator(k, hold_out).validate(dataset)?;
        let scores = c_index(&dataset.targets(), &predictions)?;

        log::debug!(
            "k={} hold_out={} c-index=[{:.6}, {:.6}, {:.6}]",
            k,
            hold_out,
            scores[0].to_f64().unwrap_or(f64::NAN),
            scores[1].to_f64().unwrap_or(f64::NAN),
            scores[2].to_f64().unwrap_or(f64::NAN)
        );

        Ok(scores)
    }

    #[cfg(feature = "parallel")]
    fn score_all<T>(
        dataset: &Dataset<T>,
        config: &SweepConfig,
        combos: &[(usize, usize)],
    ) -> Result<Vec<[T; TARGETS]>, KnnError>
    where
        T: Float + Send + Sync,
    {
        if config.parallel {
            return combos
                .par_iter()
                .map(|&(k, h)| Self::evaluate(dataset, config, k, h))
                .collect();
        }
        Self::score_sequential(dataset, config, combos)
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all<T>(
        dataset: &Dataset<T>,
        config: &SweepConfig,
        combos: &[(usize, usize)],
    ) -> Result<Vec<[T; TARGETS]>, KnnError>
    where
        T: Float + Send + Sync,
    {
        if config.parallel {
            log::debug!("`parallel` feature disabled; running the sweep sequentially");
        }
        Self::score_sequential(dataset, config, combos)
    }

    fn score_sequential<T: Float>(
        dataset: &Dataset<T>,
        config: &SweepConfig,
        combos: &[(usize, usize)],
    ) -> Result<Vec<[T; TARGETS]>, KnnError> {
        combos
            .iter()
            .map(|&(k, h)| Self::evaluate(dataset, config, k, h))
            .collect()
    }
}
