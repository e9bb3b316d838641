//! Distance metrics over record feature vectors.
//!
//! ## Purpose
//!
//! This module computes the distance between two records used to rank
//! neighbours. Only the feature block takes part; the target block is
//! ignored.
//!
//! ## Design notes
//!
//! * **Decoupling**: Distance calculation is separated from neighbour ranking.
//! * **Feature-only**: `between` slices off the targets before measuring.
//!
//! ## Key concepts
//!
//! * **Metric**: Defines how "closeness" is measured (Euclidean by default).
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero when the feature blocks are identical.
//!
//! ## Non-goals
//!
//! * This module does not scale or normalize features.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Record;

// ============================================================================
// Distance Metric Enum
// ============================================================================

/// Distance metric for neighbour ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Standard Euclidean distance: √(Σ(xᵢ - yᵢ)²)
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): Σ|xᵢ - yᵢ|
    Manhattan,

    /// Chebyshev distance (L∞ norm): max|xᵢ - yᵢ|
    Chebyshev,
}

// ============================================================================
// Distance Computation Functions
// ============================================================================

impl DistanceMetric {
    /// Distance between the feature blocks of two records.
    #[inline]
    pub fn between<T: Float>(&self, a: Record<'_, T>, b: Record<'_, T>) -> T {
        self.compute(a.features(), b.features())
    }

    /// Distance between two raw feature vectors.
    #[inline]
    pub fn compute<T: Float>(&self, a: &[T], b: &[T]) -> T {
        match self {
            DistanceMetric::Euclidean => Self::euclidean(a, b),
            DistanceMetric::Manhattan => Self::manhattan(a, b),
            DistanceMetric::Chebyshev => Self::chebyshev(a, b),
        }
    }

    /// Compute Euclidean distance between two points.
    #[inline]
    pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| {
                let diff = ai - bi;
                diff * diff
            })
            .fold(T::zero(), |acc, x| acc + x)
            .sqrt()
    }

    /// Compute Manhattan distance (L1 norm).
    #[inline]
    pub fn manhattan<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// Compute Chebyshev distance (L-inf norm).
    #[inline]
    pub fn chebyshev<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), T::max)
    }
}
