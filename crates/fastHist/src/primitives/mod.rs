//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the primitive abstractions shared by every other layer:
//! the error type, the parallelism hint and boundary validation. It has no
//! internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Sequential/parallel execution hint.
pub mod parallelism;

/// Length and range checks performed before accumulation.
pub mod validator;
