//! Input validation for sweep configuration and data.
//!
//! ## Purpose
//!
//! This module checks sweep parameters before any work starts: neighbour
//! counts, hold-out sizes, and the builder's duplicate-setter tracking.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: All checks are associated functions on `Validator`.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: `k >= 1` and `leave_out >= 1`.
//! * **Non-empty sweeps**: A sweep needs at least one k and one hold-out size.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check that `k` fits in every training partition;
//!   smaller partitions simply yield fewer neighbours.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

// Internal dependencies
use crate::primitives::errors::KnnError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sweep configuration.
///
/// All methods return `Result<(), KnnError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a neighbour count.
    pub fn validate_neighbours(k: usize) -> Result<(), KnnError> {
        if k == 0 {
            return Err(KnnError::InvalidNeighbours(k));
        }
        Ok(())
    }

    /// Validate a hold-out size.
    pub fn validate_leave_out(leave_out: usize) -> Result<(), KnnError> {
        if leave_out == 0 {
            return Err(KnnError::InvalidLeaveOut(leave_out));
        }
        Ok(())
    }

    /// Validate the candidate neighbour counts of a sweep.
    pub fn validate_neighbour_list(ks: &[usize]) -> Result<(), KnnError> {
        if ks.is_empty() {
            return Err(KnnError::InvalidConfig(
                "at least one neighbour count is required".to_string(),
            ));
        }
        for &k in ks {
            Self::validate_neighbours(k)?;
        }
        Self::validate_unique(ks, "neighbour count")
    }

    /// Validate the hold-out sizes of a sweep.
    pub fn validate_hold_outs(hold_outs: &[usize]) -> Result<(), KnnError> {
        if hold_outs.is_empty() {
            return Err(KnnError::InvalidConfig(
                "at least one hold-out size is required".to_string(),
            ));
        }
        for &p in hold_outs {
            Self::validate_leave_out(p)?;
        }
        Self::validate_unique(hold_outs, "hold-out size")
    }

    /// Reject repeated entries, which would make table lookups ambiguous.
    fn validate_unique(values: &[usize], what: &str) -> Result<(), KnnError> {
        for (i, v) in values.iter().enumerate() {
            if values[..i].contains(v) {
                return Err(KnnError::InvalidConfig(format!(
                    "{} {} is listed more than once",
                    what, v
                )));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), KnnError> {
        if let Some(param) = duplicate_param {
            return Err(KnnError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
