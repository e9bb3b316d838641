//! Layer 4: Evaluation
//!
//! ## Purpose
//!
//! This layer measures prediction quality: leave-p-out cross-validation
//! produces held-out predictions and the concordance index scores them.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Concordance index scoring.
pub mod concordance;

/// Leave-p-out cross-validation.
pub mod cv;
