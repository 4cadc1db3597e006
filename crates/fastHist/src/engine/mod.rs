//! Layer 3: Engine
//!
//! ## Purpose
//!
//! This layer provides the accumulation engine: serial single-pass fills and
//! rayon-based parallel fills with private per-worker buffers, plus the owned
//! result types handed back by the high-level API.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Input
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Serial and parallel accumulators.
pub mod executor;

/// Filled histogram results.
pub mod output;
