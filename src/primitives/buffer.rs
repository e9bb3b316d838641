//! Reusable buffers for neighbour search and cross-validation.
//!
//! ## Purpose
//!
//! This module provides the bounded candidate container used by the
//! neighbour search. One buffer is reused for every query of a
//! cross-validation run, so sweeping many `(k, leave_out)` combinations does
//! not reallocate per query.
//!
//! ## Design notes
//!
//! * **Sorted fixed array**: `CandidateBuffer` keeps at most `capacity`
//!   entries sorted ascending by rank. The worst entry is always the last.
//! * **Stable insertion**: New entries go after every entry of equal rank,
//!   and an entry only displaces the worst one when strictly better.
//! * **Lazy expansion**: Storage grows with the entries actually retained,
//!   never with the requested capacity alone, so an oversized `k` costs
//!   nothing until enough candidates arrive.
//!
//! ## Key concepts
//!
//! * **Rank**: The value entries are ordered by (a distance for neighbours).
//! * **First-seen wins**: Ties never evict an entry that is already retained.
//!
//! ## Invariants
//!
//! * `len() <= capacity()`.
//! * Entries are sorted non-decreasing by rank; equal ranks keep arrival order.
//!
//! ## Non-goals
//!
//! * Thread-local caching (buffers are passed explicitly, one per worker).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Candidate Buffer
// ============================================================================

/// Entries that can be ranked inside a `CandidateBuffer`.
pub trait Ranked {
    /// Type of the ordering key.
    type Rank: Float;

    /// Ordering key; smaller is better.
    fn rank(&self) -> Self::Rank;
}

/// Fixed-capacity container keeping the best `capacity` entries seen so far.
#[derive(Debug, Clone)]
pub struct CandidateBuffer<N> {
    entries: Vec<N>,
    capacity: usize,
}

impl<N> CandidateBuffer<N> {
    /// Create an empty buffer retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of retained entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once `capacity` entries are retained.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Drop all entries and change the capacity. Storage is kept.
    pub fn reset(&mut self, capacity: usize) {
        self.entries.clear();
        self.capacity = capacity;
    }

    /// Reserve room for `expected` offers, clamped to the capacity.
    pub fn reserve(&mut self, expected: usize) {
        let target = expected.min(self.capacity);
        self.entries.reserve(target.saturating_sub(self.entries.len()));
    }

    /// Retained entries, best first.
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.entries
    }

    /// Move the retained entries out, best first.
    pub fn drain(&mut self) -> impl Iterator<Item = N> + '_ {
        self.entries.drain(..)
    }
}

impl<N: Ranked> CandidateBuffer<N> {
    /// Current worst retained entry.
    #[inline]
    pub fn worst(&self) -> Option<&N> {
        self.entries.last()
    }

    /// Offer an entry.
    ///
    /// While filling, every entry is kept. Once full, the entry replaces the
    /// worst one only if its rank is strictly smaller. Returns whether the
    /// entry was retained.
    pub fn offer(&mut self, entry: N) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let rank = entry.rank();
        if self.is_full() {
            let beats_worst = self.entries.last().is_some_and(|w| rank < w.rank());
            if !beats_worst {
                return false;
            }
            self.entries.pop();
        }

        // Upper bound: after every entry with rank <= new rank.
        let pos = self.entries.partition_point(|e| e.rank() <= rank);
        self.entries.insert(pos, entry);
        true
    }
}
