//! Concordance index (c-index) between real and predicted targets.
//!
//! ## Purpose
//!
//! This module measures, for each target dimension independently, how often
//! predictions rank pairs of records in the same order as the real values.
//!
//! ## Design notes
//!
//! * **Pairwise counting**: Every unordered pair `i < j` is visited once.
//! * **Half credit**: A predicted tie on a comparable pair counts 0.5.
//! * **Shape checks first**: Lengths and row widths are validated before
//!   entering the O(n²) loop.
//! * **Undefined scores**: A dimension with no comparable pairs scores NaN.
//!
//! ## Key concepts
//!
//! * **Comparable pair**: A pair whose real values differ in that dimension.
//! * **Concordant pair**: A comparable pair ordered the same way by the prediction.
//!
//! ## Invariants
//!
//! * Every defined score lies in `[0, 1]`.
//! * Scores do not depend on the order of rows, only on their pairing.
//!
//! ## Non-goals
//!
//! * This module does not handle censoring (survival-analysis c-index).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::TARGETS;
use crate::primitives::errors::KnnError;

// ============================================================================
// Pair Counts
// ============================================================================

/// Raw pair counts per target dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCounts<T> {
    /// Number of comparable pairs.
    pub comparable: [usize; TARGETS],
    /// Concordance credit (1 per agreeing pair, 0.5 per predicted tie).
    pub concordant: [T; TARGETS],
}

impl<T: Float> PairCounts<T> {
    /// Count comparable and concordant pairs.
    pub fn count<R, P>(real: &[R], pred: &[P]) -> Result<Self, KnnError>
    where
        R: AsRef<[T]>,
        P: AsRef<[T]>,
    {
        check_shapes::<T, R, P>(real, pred)?;

        let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));
        let mut comparable = [0usize; TARGETS];
        let mut concordant = [T::zero(); TARGETS];

        for i in 0..real.len() {
            let (ri, pi) = (real[i].as_ref(), pred[i].as_ref());
            for j in (i + 1)..real.len() {
                let (rj, pj) = (real[j].as_ref(), pred[j].as_ref());
                for c in 0..TARGETS {
                    let (t, tt) = (ri[c], rj[c]);
                    if t == tt {
                        continue;
                    }
                    comparable[c] += 1;

                    let (p, pp) = (pi[c], pj[c]);
                    if (p < pp && t < tt) || (p > pp && t > tt) {
                        concordant[c] = concordant[c] + T::one();
                    } else if p == pp {
                        concordant[c] = concordant[c] + half;
                    }
                }
            }
        }

        Ok(Self {
            comparable,
            concordant,
        })
    }

    /// Per-dimension c-index; NaN where no pair was comparable.
    pub fn scores(&self) -> [T; TARGETS] {
        let mut out = [T::nan(); TARGETS];
        for (c, score) in out.iter_mut().enumerate() {
            if self.comparable[c] > 0 {
                if let Some(n) = T::from(self.comparable[c]) {
                    *score = self.concordant[c] / n;
                }
            }
        }
        out
    }
}

// ============================================================================
// Public Entry Point
// ============================================================================

/// Compute the c-index of `pred` against `real` for each target dimension.
///
/// Rows are compared on their first `TARGETS` fields, so dataset records can
/// be passed as `real` directly. A dimension without comparable pairs scores NaN.
pub fn c_index<T, R, P>(real: &[R], pred: &[P]) -> Result<[T; TARGETS], KnnError>
where
    T: Float,
    R: AsRef<[T]>,
    P: AsRef<[T]>,
{
    PairCounts::<T>::count(real, pred).map(|counts| counts.scores())
}

/// True when a score is the undefined sentinel.
#[inline]
pub fn is_degenerate<T: Float>(score: T) -> bool {
    score.is_nan()
}

fn check_shapes<T, R, P>(real: &[R], pred: &[P]) -> Result<(), KnnError>
where
    R: AsRef<[T]>,
    P: AsRef<[T]>,
{
    if real.len() != pred.len() {
        return Err(KnnError::ShapeMismatch {
            real: real.len(),
            pred: pred.len(),
        });
    }
    for (row, (r, p)) in real.iter().zip(pred).enumerate() {
        let got = r.as_ref().len().min(p.as_ref().len());
        if got < TARGETS {
            return Err(KnnError::TooFewTargets {
                row,
                got,
                min: TARGETS,
            });
        }
    }
    Ok(())
}
