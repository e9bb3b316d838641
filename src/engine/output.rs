//! Sweep results.
//!
//! ## Purpose
//!
//! This module defines `ScoreTable`, the c-index vectors produced for every
//! `(k, hold-out size)` combination of a sweep, and the accessors a plotting
//! or reporting collaborator needs.
//!
//! ## Design notes
//!
//! * **Plain arrays**: Panels and series are returned as `Vec<T>` so any
//!   renderer can consume them.
//! * **Hold-out major**: Scores are stored one panel (hold-out size) after another.
//!
//! ## Invariants
//!
//! * `scores.len() == hold_outs.len() * ks.len()`.
//! * Undefined scores are NaN and listed by `degenerate()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::TARGETS;

/// Default names of the three targets.
pub const DEFAULT_LABELS: [&str; TARGETS] = ["Total", "Cd", "Pb"];

/// A slot whose score is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateScore {
    /// Neighbour count of the slot.
    pub k: usize,
    /// Hold-out size of the slot.
    pub hold_out: usize,
    /// Target dimension without comparable pairs.
    pub dimension: usize,
}

/// C-index vectors indexed by neighbour count and hold-out size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable<T> {
    ks: Vec<usize>,
    hold_outs: Vec<usize>,
    labels: [&'static str; TARGETS],
    n_records: usize,
    scores: Vec<[T; TARGETS]>,
}

impl<T: Float> ScoreTable<T> {
    /// Assemble a table from hold-out-major scores.
    pub(crate) fn new(
        ks: Vec<usize>,
        hold_outs: Vec<usize>,
        labels: [&'static str; TARGETS],
        n_records: usize,
        scores: Vec<[T; TARGETS]>,
    ) -> Self {
        debug_assert_eq!(scores.len(), ks.len() * hold_outs.len());
        Self {
            ks,
            hold_outs,
            labels,
            n_records,
            scores,
        }
    }

    /// Neighbour counts, in sweep order (the x axis of every panel).
    pub fn ks(&self) -> &[usize] {
        &self.ks
    }

    /// Hold-out sizes, one panel each.
    pub fn hold_outs(&self) -> &[usize] {
        &self.hold_outs
    }

    /// Target labels used for reporting.
    pub fn labels(&self) -> [&'static str; TARGETS] {
        self.labels
    }

    /// Number of records the sweep ran on.
    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Scores for one combination.
    pub fn get(&self, k: usize, hold_out: usize) -> Option<[T; TARGETS]> {
        let ki = self.ks.iter().position(|&x| x == k)?;
        let hi = self.hold_outs.iter().position(|&x| x == hold_out)?;
        self.scores.get(hi * self.ks.len() + ki).copied()
    }

    /// One panel: for each target, its scores across all ks.
    pub fn panel(&self, hold_out: usize) -> Option<[Vec<T>; TARGETS]> {
        let hi = self.hold_outs.iter().position(|&x| x == hold_out)?;
        let rows = &self.scores[hi * self.ks.len()..(hi + 1) * self.ks.len()];
        Some(core::array::from_fn(|c| rows.iter().map(|s| s[c]).collect()))
    }

    /// Scores of one target across all ks for one hold-out size.
    pub fn series(&self, hold_out: usize, dimension: usize) -> Option<Vec<T>> {
        if dimension >= TARGETS {
            return None;
        }
        let [a, b, c] = self.panel(hold_out)?;
        Some(match dimension {
            0 => a,
            1 => b,
            _ => c,
        })
    }

    /// Iterate over `(k, hold_out, scores)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, [T; TARGETS])> + '_ {
        let n_k = self.ks.len();
        self.scores
            .iter()
            .enumerate()
            .map(move |(i, &s)| (self.ks[i % n_k], self.hold_outs[i / n_k], s))
    }

    /// Slots whose score is undefined.
    pub fn degenerate(&self) -> Vec<DegenerateScore> {
        self.iter()
            .flat_map(|(k, hold_out, s)| {
                (0..TARGETS)
                    .filter(move |&c| s[c].is_nan())
                    .map(move |dimension| DegenerateScore {
                        k,
                        hold_out,
                        dimension,
                    })
            })
            .collect()
    }
}

impl<T: Float> Display for ScoreTable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Records: {}", self.n_records)?;
        writeln!(f, "  Neighbour counts: {:?}", self.ks)?;

        for &hold_out in &self.hold_outs {
            writeln!(f)?;
            writeln!(f, "{}-leave out cross-validation:", hold_out)?;
            write!(f, "  {:>6}", "K")?;
            for label in self.labels {
                write!(f, " {:>10}", label)?;
            }
            writeln!(f)?;
            writeln!(f, "  {}", "-".repeat(6 + 11 * TARGETS))?;

            for &k in &self.ks {
                write!(f, "  {:>6}", k)?;
                if let Some(scores) = self.get(k, hold_out) {
                    for s in scores {
                        write!(f, " {:>10.6}", s.to_f64().unwrap_or(f64::NAN))?;
                    }
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
