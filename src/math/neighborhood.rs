//! Exhaustive k-nearest-neighbour search.
//!
//! ## Purpose
//!
//! This module finds, for one query record, the `k` training records whose
//! feature blocks are closest to the query's.
//!
//! ## Design notes
//!
//! * **Exhaustive scan**: Every training record is measured once, in order.
//! * **Bounded buffer**: Candidates live in a `CandidateBuffer` of capacity
//!   `k`; the first `k` records seed it and later records replace the
//!   current worst only when strictly closer.
//! * **Borrowed records**: Neighbours reference the training rows; nothing is copied.
//!
//! ## Key concepts
//!
//! * **Neighbour**: A `(distance, record)` pair.
//! * **First-seen tie-break**: A record at exactly the worst retained
//!   distance does not displace it. Among equal distances, earlier training
//!   records come first.
//!
//! ## Invariants
//!
//! * The result holds `min(k, |training|)` neighbours; storage follows the
//!   training size, not `k`.
//! * Query and training records share one width.
//! * Neighbours are sorted non-decreasing by distance.
//!
//! ## Non-goals
//!
//! * This module does not build spatial indices or approximate the search.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::DistanceMetric;
use crate::primitives::buffer::{CandidateBuffer, Ranked};
use crate::primitives::dataset::{Dataset, Record};
use crate::primitives::errors::KnnError;

// ============================================================================
// Neighbour
// ============================================================================

/// A training record paired with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a, T> {
    /// Feature distance to the query.
    pub distance: T,
    /// The training record.
    pub record: Record<'a, T>,
}

impl<'a, T: Float> Neighbour<'a, T> {
    /// Pair a raw record with a distance.
    pub fn new(distance: T, fields: &'a [T]) -> Result<Self, KnnError> {
        Ok(Self {
            distance,
            record: Record::new(fields)?,
        })
    }
}

impl<T: Float> Ranked for Neighbour<'_, T> {
    type Rank = T;

    #[inline]
    fn rank(&self) -> T {
        self.distance
    }
}

// ============================================================================
// Neighbour Search
// ============================================================================

/// Exhaustive nearest-neighbour search under a fixed metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighbourSearch {
    metric: DistanceMetric,
}

impl NeighbourSearch {
    /// Create a search using `metric`.
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    /// The metric in use.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Collect the `k` nearest training records into `candidates`.
    ///
    /// `candidates` is reset first, so one buffer can serve many queries.
    /// Every training record must have the query's width.
    pub fn search_into<'a, T, I>(
        &self,
        training: I,
        query: Record<'_, T>,
        k: usize,
        candidates: &mut CandidateBuffer<Neighbour<'a, T>>,
    ) -> Result<(), KnnError>
    where
        T: Float,
        I: IntoIterator<Item = Record<'a, T>>,
    {
        if k == 0 {
            return Err(KnnError::InvalidNeighbours(k));
        }

        candidates.reset(k);
        let training = training.into_iter();
        candidates.reserve(training.size_hint().0);

        let width = query.fields().len();
        for record in training {
            if record.fields().len() != width {
                return Err(KnnError::WidthMismatch {
                    expected: record.fields().len(),
                    got: width,
                });
            }
            let distance = self.metric.between(query, record);
            candidates.offer(Neighbour { distance, record });
        }

        Ok(())
    }

    /// Find the `k` nearest training records, closest first.
    pub fn search<'a, T, I>(
        &self,
        training: I,
        query: Record<'_, T>,
        k: usize,
    ) -> Result<Vec<Neighbour<'a, T>>, KnnError>
    where
        T: Float,
        I: IntoIterator<Item = Record<'a, T>>,
    {
        let mut candidates = CandidateBuffer::new(k);
        self.search_into(training, query, k, &mut candidates)?;
        Ok(candidates.drain().collect())
    }
}

/// Find the `k` records of `training` nearest to `query` by Euclidean feature distance.
pub fn find_neighbours<'a, T: Float>(
    training: &'a Dataset<T>,
    query: Record<'_, T>,
    k: usize,
) -> Result<Vec<Neighbour<'a, T>>, KnnError> {
    NeighbourSearch::default().search(training.records(), query, k)
}
