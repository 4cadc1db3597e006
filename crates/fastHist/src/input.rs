//! Input abstractions for histogram filling.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for sample and weight buffers,
//! allowing the `fill` methods to accept slices, vectors and ndarray arrays
//! through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Inputs are borrowed as contiguous slices, never copied.
//! * **Element types**: Any primitive numeric type convertible to `f64`
//!   (`f32`, `f64`, signed and unsigned integers), resolved at compile time.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected before
//!   any accumulation starts.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not filter or clean values; out-of-range samples are
//!   dropped later by the bin indexer.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::AsPrimitive;

// Internal dependencies
use crate::primitives::errors::HistError;

/// Trait for types that can be histogrammed or used as weights.
pub trait HistInput<T: AsPrimitive<f64>> {
    /// Borrow the input as a contiguous slice.
    fn as_hist_slice(&self) -> Result<&[T], HistError>;
}

impl<T: AsPrimitive<f64>> HistInput<T> for [T] {
    fn as_hist_slice(&self) -> Result<&[T], HistError> {
        Ok(self)
    }
}

impl<T: AsPrimitive<f64>> HistInput<T> for Vec<T> {
    fn as_hist_slice(&self) -> Result<&[T], HistError> {
        Ok(self.as_slice())
    }
}

impl<T: AsPrimitive<f64>, const N: usize> HistInput<T> for [T; N] {
    fn as_hist_slice(&self) -> Result<&[T], HistError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: AsPrimitive<f64>, S> HistInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_hist_slice(&self) -> Result<&[T], HistError> {
        self.as_slice().ok_or_else(|| {
            HistError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
