//! Error types for histogram construction and filling.
//!
//! Every variant is raised before any accumulation loop starts, so a failed
//! call never leaves a caller buffer partially written. Samples that fall
//! outside the binning range (including NaN and infinities) are not errors.

use thiserror::Error;

/// Errors returned by fastHist operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistError {
    /// The binning specification cannot describe a uniform partition.
    #[error("invalid binning (nbins = {nbins}, xmin = {xmin}, xmax = {xmax}): {reason}")]
    InvalidBinningSpec {
        /// Requested number of bins.
        nbins: usize,
        /// Requested lower edge.
        xmin: f64,
        /// Requested upper edge.
        xmax: f64,
        /// What is wrong with the request.
        reason: &'static str,
    },

    /// Weight buffer length differs from the sample buffer length.
    #[error("weights have {weights} elements but samples have {samples}")]
    LengthMismatch {
        /// Number of samples.
        samples: usize,
        /// Number of weights.
        weights: usize,
    },

    /// A caller-provided result buffer is not exactly `nbins` long.
    #[error("result buffer has {got} elements, expected {expected}")]
    OutputSizeMismatch {
        /// Number of bins.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },

    /// A required builder parameter was never set.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Input cannot be viewed as a contiguous slice, or is otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Density normalization of a histogram whose total is zero.
    #[error("cannot normalize a histogram with zero total")]
    EmptyHistogram,

    /// A dedicated worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}
