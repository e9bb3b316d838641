//! Layer 5: Engine
//!
//! ## Purpose
//!
//! This layer orchestrates sweeps: it validates configuration, runs
//! cross-validation and scoring for every `(k, hold-out)` combination, and
//! assembles the resulting `ScoreTable`.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sweep execution.
pub mod executor;

/// Sweep results.
pub mod output;

/// Configuration validation.
pub mod validator;
