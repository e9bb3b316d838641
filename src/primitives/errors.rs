//! Error types for k-NN regression, cross-validation and scoring.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Errors are detected at the lowest layer that can
//! observe them and propagated upward unchanged.
//!
//! ## Design notes
//!
//! * **Flat enum**: One variant per failure, carrying the offending values.
//! * **no_std friendly**: `Display` is hand-written; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! * **Invalid input**: `k == 0`, `leave_out == 0`, empty neighbourhoods.
//! * **Shape errors**: mismatched prediction lengths, short or ragged rows,
//!   queries narrower or wider than the training records.
//!
//! ## Non-goals
//!
//! * Degenerate c-index dimensions are not errors (they surface as NaN).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

/// Errors produced by k-NN regression, cross-validation and concordance scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum KnnError {
    /// The input contains no rows.
    EmptyInput,

    /// The number of neighbours must be at least 1.
    InvalidNeighbours(usize),

    /// The hold-out size of a fold must be at least 1.
    InvalidLeaveOut(usize),

    /// The regressor was handed an empty neighbour set.
    EmptyNeighbourhood,

    /// Real and predicted sequences have different lengths.
    ShapeMismatch {
        /// Number of real rows.
        real: usize,
        /// Number of predicted rows.
        pred: usize,
    },

    /// A row carries fewer fields than the number of targets.
    TooFewTargets {
        /// Index of the offending row.
        row: usize,
        /// Number of fields found.
        got: usize,
        /// Number of fields required.
        min: usize,
    },

    /// The dataset has no room for at least one feature column.
    TooFewColumns {
        /// Number of columns found.
        got: usize,
        /// Number of columns required.
        min: usize,
    },

    /// A dataset row does not match the width of the first row.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the offending row.
        got: usize,
        /// Width of the first row.
        expected: usize,
    },

    /// A query record does not have the width of the training records.
    WidthMismatch {
        /// Width of the training records.
        expected: usize,
        /// Width of the query.
        got: usize,
    },

    /// A non-finite value was found in the data.
    InvalidNumericValue(String),

    /// The sweep configuration is unusable.
    InvalidConfig(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for KnnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnnError::EmptyInput => write!(f, "Input is empty"),
            KnnError::InvalidNeighbours(k) => {
                write!(f, "Invalid neighbour count: {} (must be at least 1)", k)
            }
            KnnError::InvalidLeaveOut(p) => {
                write!(f, "Invalid leave_out: {} (must be at least 1)", p)
            }
            KnnError::EmptyNeighbourhood => {
                write!(f, "Cannot regress from an empty neighbour set")
            }
            KnnError::ShapeMismatch { real, pred } => write!(
                f,
                "Shape mismatch: real has {} rows, pred has {}",
                real, pred
            ),
            KnnError::TooFewTargets { row, got, min } => write!(
                f,
                "Row {} has {} fields, need at least {} targets",
                row, got, min
            ),
            KnnError::TooFewColumns { got, min } => {
                write!(f, "Too few columns: got {}, need at least {}", got, min)
            }
            KnnError::RaggedRows { row, got, expected } => write!(
                f,
                "Row {} has {} columns, expected {}",
                row, got, expected
            ),
            KnnError::WidthMismatch { expected, got } => write!(
                f,
                "Query has {} fields, training records have {}",
                got, expected
            ),
            KnnError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            KnnError::InvalidConfig(s) => write!(f, "Invalid configuration: {}", s),
            KnnError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KnnError {}
