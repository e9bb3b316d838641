//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer turns neighbour sets into predictions.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// k-NN regression from neighbour sets.
pub mod regression;
