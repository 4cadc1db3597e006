//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the pure numeric building blocks: mapping a sample to
//! a bin under a uniform partition, and normalizing filled bins to a density.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Input
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Uniform binning specification and sample-to-bin indexing.
pub mod binning;

/// Density normalization with uncertainty propagation.
pub mod density;
