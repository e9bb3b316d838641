//! Record and dataset layout.
//!
//! ## Purpose
//!
//! This module defines the in-memory matrix the whole pipeline works on.
//! Every record has the fixed layout `[target₀, target₁, target₂, feature₁ … featureₙ]`.
//!
//! ## Design notes
//!
//! * **Row-major storage**: Records live in one flat vector, `n_cols` apart.
//! * **Borrowed records**: `Record` is a thin view over one row; nothing is copied.
//! * **Validated once**: Width, raggedness and finiteness are checked at construction.
//!   Free-standing records (queries) are width-checked by `Record::new`.
//!
//! ## Invariants
//!
//! * `values.len() == n_rows * n_cols` and `n_rows >= 1`.
//! * `n_cols >= TARGETS + 1`.
//! * Record order is the order the rows were supplied in.
//!
//! ## Non-goals
//!
//! * This module does not parse files or normalize columns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KnnError;

/// Number of regression targets at the front of every record.
pub const TARGETS: usize = 3;

/// Predicted target vectors, one per dataset record, in dataset order.
pub type PredictionMatrix<T> = Vec<[T; TARGETS]>;

// ============================================================================
// Record
// ============================================================================

/// Borrowed view of a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a, T> {
    fields: &'a [T],
}

impl<'a, T: Float> Record<'a, T> {
    /// Wrap a raw row holding the target block and at least one feature.
    pub fn new(fields: &'a [T]) -> Result<Self, KnnError> {
        if fields.len() < TARGETS + 1 {
            return Err(KnnError::TooFewColumns {
                got: fields.len(),
                min: TARGETS + 1,
            });
        }
        Ok(Self { fields })
    }

    /// Wrap a row already known to be wide enough.
    #[inline]
    pub(crate) fn from_row(fields: &'a [T]) -> Self {
        debug_assert!(fields.len() > TARGETS, "record shorter than target block");
        Self { fields }
    }

    /// All fields of the record.
    #[inline]
    pub fn fields(&self) -> &'a [T] {
        self.fields
    }

    /// The target block.
    #[inline]
    pub fn targets(&self) -> &'a [T] {
        &self.fields[..TARGETS]
    }

    /// The feature block (everything after the targets).
    #[inline]
    pub fn features(&self) -> &'a [T] {
        &self.fields[TARGETS..]
    }

    /// Copy the target block into a fixed array.
    #[inline]
    pub fn target_vector(&self) -> [T; TARGETS] {
        [self.fields[0], self.fields[1], self.fields[2]]
    }
}

impl<T> AsRef<[T]> for Record<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.fields
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Ordered, immutable collection of records sharing one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    values: Vec<T>,
    n_cols: usize,
}

impl<T: Float> Dataset<T> {
    /// Build a dataset from a flat row-major buffer.
    pub fn new(values: Vec<T>, n_cols: usize) -> Result<Self, KnnError> {
        if n_cols < TARGETS + 1 {
            return Err(KnnError::TooFewColumns {
                got: n_cols,
                min: TARGETS + 1,
            });
        }
        if values.is_empty() {
            return Err(KnnError::EmptyInput);
        }
        if values.len() % n_cols != 0 {
            let row = values.len() / n_cols;
            return Err(KnnError::RaggedRows {
                row,
                got: values.len() % n_cols,
                expected: n_cols,
            });
        }
        check_finite(&values, n_cols)?;

        Ok(Self { values, n_cols })
    }

    /// Wrap a buffer whose shape and values are already known to be valid.
    pub(crate) fn from_parts_unchecked(values: Vec<T>, n_cols: usize) -> Self {
        debug_assert!(n_cols > TARGETS && !values.is_empty() && values.len() % n_cols == 0);
        Self { values, n_cols }
    }

    /// Build a dataset from a sequence of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, KnnError> {
        let first = rows.first().ok_or(KnnError::EmptyInput)?;
        let n_cols = first.as_ref().len();
        if n_cols < TARGETS + 1 {
            return Err(KnnError::TooFewColumns {
                got: n_cols,
                min: TARGETS + 1,
            });
        }

        let mut values = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(KnnError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: n_cols,
                });
            }
            values.extend_from_slice(row);
        }

        Self::new(values, n_cols)
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len() / self.n_cols
    }

    /// Always false for a constructed dataset; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields per record.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of feature fields per record.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_cols - TARGETS
    }

    /// Record at position `i`.
    #[inline]
    pub fn record(&self, i: usize) -> Record<'_, T> {
        Record::from_row(&self.values[i * self.n_cols..(i + 1) * self.n_cols])
    }

    /// Iterate over records in dataset order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = Record<'_, T>> + '_ {
        self.values.chunks_exact(self.n_cols).map(Record::from_row)
    }

    /// Iterate over the records in `range`, in dataset order.
    pub fn records_in(
        &self,
        range: Range<usize>,
    ) -> impl ExactSizeIterator<Item = Record<'_, T>> + '_ {
        self.rows(range).chunks_exact(self.n_cols).map(Record::from_row)
    }

    /// Flat row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Flat values of the rows in `range`.
    #[inline]
    pub fn rows(&self, range: Range<usize>) -> &[T] {
        &self.values[range.start * self.n_cols..range.end * self.n_cols]
    }

    /// The dataset's own target columns, one vector per record.
    pub fn targets(&self) -> PredictionMatrix<T> {
        self.records().map(|r| r.target_vector()).collect()
    }

    /// Consume the dataset and return its flat buffer and width.
    pub fn into_parts(self) -> (Vec<T>, usize) {
        (self.values, self.n_cols)
    }
}

fn check_finite<T: Float>(values: &[T], n_cols: usize) -> Result<(), KnnError> {
    for (i, &val) in values.iter().enumerate() {
        if !val.is_finite() {
            return Err(KnnError::InvalidNumericValue(format!(
                "row {} col {}={}",
                i / n_cols,
                i % n_cols,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }
    Ok(())
}
