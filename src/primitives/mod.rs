//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The record/dataset layout
//! - Error types
//! - Bounded candidate buffers and reusable scratch space
//! - Sequential fold partitioning
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Reusable buffers.
pub mod buffer;

/// Record and dataset layout.
pub mod dataset;

/// Error types.
pub mod errors;

/// Fold partitioning.
pub mod partition;
