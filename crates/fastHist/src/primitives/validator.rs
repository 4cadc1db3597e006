//! Boundary checks run before any accumulation loop.
//!
//! The accumulators index result buffers with bin numbers produced by the
//! indexer, so buffer lengths must be established here rather than trusted.

use crate::primitives::errors::HistError;

/// Stateless namespace for input checks.
pub struct Validator;

impl Validator {
    /// Ensure `weights` is the same length as `samples`.
    pub fn validate_weights(n_samples: usize, n_weights: usize) -> Result<(), HistError> {
        if n_samples != n_weights {
            return Err(HistError::LengthMismatch {
                samples: n_samples,
                weights: n_weights,
            });
        }
        Ok(())
    }

    /// Ensure a result buffer holds exactly `nbins` elements.
    pub fn validate_output(nbins: usize, len: usize) -> Result<(), HistError> {
        if len != nbins {
            return Err(HistError::OutputSizeMismatch {
                expected: nbins,
                got: len,
            });
        }
        Ok(())
    }

    /// Ensure `nbins`, `xmin` and `xmax` describe a non-empty finite range.
    pub fn validate_binning(nbins: usize, xmin: f64, xmax: f64) -> Result<(), HistError> {
        let reason = if nbins == 0 {
            "nbins must be positive"
        } else if !xmin.is_finite() || !xmax.is_finite() {
            "range bounds must be finite"
        } else if xmax <= xmin {
            "xmax must be greater than xmin"
        } else if !(xmax - xmin).is_finite() || !(1.0 / (xmax - xmin)).is_finite() {
            "range width is not representable"
        } else {
            return Ok(());
        };

        Err(HistError::InvalidBinningSpec {
            nbins,
            xmin,
            xmax,
            reason,
        })
    }
}
