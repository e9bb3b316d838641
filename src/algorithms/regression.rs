//! Neighbour aggregation for k-NN regression.
//!
//! ## Purpose
//!
//! This module turns a set of neighbours into one predicted target vector.
//!
//! ## Design notes
//!
//! * **Exact match first**: If any neighbour sits at distance exactly zero,
//!   its targets are returned unchanged and no averaging happens.
//! * **Mean otherwise**: Targets are averaged componentwise, uniformly by
//!   default or with inverse-distance weights.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The neighbour set must be non-empty.
//! * With uniform weighting the prediction lies inside the neighbours'
//!   per-target range.
//!
//! ## Non-goals
//!
//! * This module does not search for neighbours (handled by `math::neighborhood`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::neighborhood::Neighbour;
use crate::primitives::dataset::TARGETS;
use crate::primitives::errors::KnnError;

// ============================================================================
// Weighting
// ============================================================================

/// How neighbours contribute to the averaged prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Every neighbour counts the same (arithmetic mean).
    #[default]
    Uniform,

    /// Each neighbour is weighted by `1 / distance`.
    InverseDistance,
}

// ============================================================================
// Regressor
// ============================================================================

/// Aggregates neighbour targets into a prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regressor {
    weighting: Weighting,
}

impl Regressor {
    /// Create a regressor with the given weighting.
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }

    /// The weighting in use.
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Predict a target vector from `neighbours`.
    pub fn regress<T: Float>(
        &self,
        neighbours: &[Neighbour<'_, T>],
    ) -> Result<[T; TARGETS], KnnError> {
        if neighbours.is_empty() {
            return Err(KnnError::EmptyNeighbourhood);
        }

        if let Some(exact) = neighbours.iter().find(|n| n.distance == T::zero()) {
            return Ok(exact.record.target_vector());
        }

        let mut acc = [T::zero(); TARGETS];
        let mut total = T::zero();
        for n in neighbours {
            let w = match self.weighting {
                Weighting::Uniform => T::one(),
                Weighting::InverseDistance => n.distance.recip(),
            };
            for (a, &t) in acc.iter_mut().zip(n.record.targets()) {
                *a = *a + w * t;
            }
            total = total + w;
        }

        Ok(acc.map(|a| a / total))
    }
}

/// Predict a target vector as the plain mean of `neighbours`' targets.
pub fn regress<T: Float>(neighbours: &[Neighbour<'_, T>]) -> Result<[T; TARGETS], KnnError> {
    Regressor::default().regress(neighbours)
}
