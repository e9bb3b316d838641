//! Sequential fold partitioning for leave-p-out cross-validation.
//!
//! ## Purpose
//!
//! This module splits `0..n` into contiguous hold-out folds of a fixed size.
//! The complement of each fold is the training partition for that fold.
//!
//! ## Design notes
//!
//! * **Half-open ranges**: Each fold is `[start, min(start + leave_out, n))`.
//! * **No trailing empty fold**: Iteration stops as soon as `start == n`.
//!
//! ## Invariants
//!
//! * Folds are non-empty, disjoint and tile `0..n` left to right.
//! * Every fold except possibly the last has exactly `leave_out` indices.
//!
//! ## Non-goals
//!
//! * This module does not shuffle indices; record order defines the folds.

// External dependencies
use core::iter::FusedIterator;
use core::ops::Range;

/// Iterator over the hold-out folds of a dataset of length `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folds {
    n: usize,
    leave_out: usize,
    start: usize,
}

impl Folds {
    /// Partition `0..n` into folds of `leave_out` indices.
    ///
    /// A `leave_out` of zero yields no folds; callers validate it beforehand.
    pub fn new(n: usize, leave_out: usize) -> Self {
        Self {
            n,
            leave_out,
            start: if leave_out == 0 { n } else { 0 },
        }
    }

    /// Total number of folds, including a shorter final one.
    pub fn count_folds(n: usize, leave_out: usize) -> usize {
        if leave_out == 0 {
            return 0;
        }
        n.div_ceil(leave_out)
    }
}

impl Iterator for Folds {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.n {
            return None;
        }
        let start = self.start;
        let end = (start + self.leave_out).min(self.n);
        self.start = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.start >= self.n {
            0
        } else {
            Self::count_folds(self.n - self.start, self.leave_out)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Folds {}

impl FusedIterator for Folds {}
