//! # knn-rs — k-Nearest-Neighbour Regression and Cross-Validation for Rust
//!
//! Predicts three continuous targets of a record from its nearest neighbours
//! in feature space, and measures how well those predictions rank records
//! with a per-target concordance index (c-index) under leave-p-out
//! cross-validation.
//!
//! ## How it works
//!
//! Every record is a flat row `[target₀, target₁, target₂, feature₀, …]`.
//!
//! 1. For a query record, find the `k` training records closest in feature space
//!    (ties keep the record seen first).
//! 2. If one of them sits at distance zero, return its targets unchanged;
//!    otherwise return the mean of their targets.
//! 3. Repeat for every record, holding out `p` consecutive records at a time.
//! 4. Score the held-out predictions against the real targets, per target.
//! 5. Sweep a list of `k` values for each hold-out size.
//!
//! ## Quick Start
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! // [total, cd, pb, feature0, feature1]
//! let rows = vec![
//!     [1.0, 0.1, 0.5, 0.0, 0.0],
//!     [2.0, 0.2, 0.4, 1.0, 0.0],
//!     [3.0, 0.3, 0.3, 2.0, 0.0],
//!     [4.0, 0.4, 0.2, 3.0, 0.0],
//!     [5.0, 0.5, 0.1, 4.0, 0.0],
//!     [6.0, 0.6, 0.0, 5.0, 0.0],
//! ];
//! let dataset = Dataset::from_rows(&rows)?;
//!
//! let sweep = Knn::new()
//!     .neighbours(&[1, 2, 3])
//!     .hold_outs(&[1, 2])
//!     .build()?;
//!
//! let table = sweep.run(&dataset)?;
//! println!("{}", table);
//!
//! let [total, cd, pb] = table.get(3, 1).unwrap();
//! assert!((0.0..=1.0).contains(&total));
//! assert!((0.0..=1.0).contains(&cd));
//! assert!((0.0..=1.0).contains(&pb));
//! assert!(table.degenerate().is_empty());
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Records: 6
//!   Neighbour counts: [1, 2, 3]
//!
//! 1-leave out cross-validation:
//!        K      Total         Cd         Pb
//!   ---------------------------------------
//!        1   0.900000   0.900000   0.900000
//!   ...
//! ```
//!
//! ### Single steps
//!
//! Each stage of the pipeline is usable on its own:
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! let rows = vec![
//!     [1.0, 1.0, 1.0, 0.0],
//!     [2.0, 2.0, 2.0, 1.0],
//!     [3.0, 3.0, 3.0, 3.0],
//! ];
//! let training = Dataset::from_rows(&rows)?;
//!
//! let query = [0.0, 0.0, 0.0, 0.9];
//! let neighbours = find_neighbours(&training, Record::new(&query)?, 2)?;
//! assert_eq!(neighbours[0].record.targets(), &[2.0, 2.0, 2.0]);
//!
//! let prediction = regress(&neighbours)?;
//! assert_eq!(prediction, [1.5, 1.5, 1.5]);
//!
//! let predictions = validate(&training, 1, 1)?;
//! let scores = c_index(&training.targets(), &predictions)?;
//! assert_eq!(scores.len(), TARGETS);
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, KnnError>`. A target dimension
//! with no comparable pairs is not an error: its c-index is NaN and the
//! combination is listed by [`ScoreTable::degenerate`](prelude::ScoreTable::degenerate).
//!
//! ## Parameters
//!
//! | Parameter           | Default                             | Description                          |
//! |---------------------|-------------------------------------|--------------------------------------|
//! | **neighbours**      | `[1, 2, 3, 4, 5, 6, 8, 10, 15, 20, 30]` | Neighbour counts swept           |
//! | **hold_outs**       | `[1, 4]`                            | Consecutive records held out per fold |
//! | **distance_metric** | `Euclidean`                         | `Euclidean`, `Manhattan`, `Chebyshev` |
//! | **weighting**       | `Uniform`                           | `Uniform`, `InverseDistance`         |
//! | **target_labels**   | `["Total", "Cd", "Pb"]`             | Names used when reporting            |
//! | **parallel**        | `false`                             | Run combinations on rayon (`parallel` feature) |
//!
//! Setting the same parameter twice is rejected by `.build()`.
//!
//! ## Feature flags
//!
//! - `std` (default): standard library support and `std::error::Error`.
//! - `parallel`: run sweep combinations in parallel with rayon.
//! - `dev`: expose internal modules for testing.
//!
//! Without `std`, the crate runs on `alloc` with `libm` math.
//!
//! ## Logging
//!
//! Progress and degenerate scores are reported through the [`log`] facade;
//! install any logger to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the record layout (`Dataset`, `Record`), the bounded candidate
// buffer, fold partitioning and errors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains distance metrics, nearest-neighbour search and column scaling.
mod math;

// Layer 3: Algorithms - neighbour regression.
mod algorithms;

// Layer 4: Evaluation - cross-validation and scoring.
//
// Contains leave-p-out cross-validation and the per-target c-index.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains sweep configuration, validation, execution and the score table.
mod engine;

// High-level fluent API.
//
// Provides the `Knn` builder for configuring and running sweeps.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard k-NN prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use knn_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        c_index, column_stats, find_neighbours, is_degenerate, regress, standardize, validate,
        CandidateBuffer, ColumnStats, CrossValidator, Dataset, DegenerateScore,
        DistanceMetric::{self, Chebyshev, Euclidean, Manhattan},
        Folds, KnnBuilder as Knn, KnnError, KnnSweep, Neighbour, NeighbourSearch, PairCounts,
        PredictionMatrix, Ranked, Record, Regressor, ScoreTable, SweepConfig,
        Weighting::{self, InverseDistance, Uniform},
        DEFAULT_HOLD_OUTS, DEFAULT_LABELS, DEFAULT_NEIGHBOURS, TARGETS,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
