//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Distance metrics over feature blocks
//! - Exhaustive k-nearest-neighbour search
//! - Column standardization
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance metrics.
pub mod distance;

/// Nearest-neighbour search.
pub mod neighborhood;

/// Column standardization.
pub mod scaling;
