//! Uniform binning and sample-to-bin indexing.
//!
//! ## Purpose
//!
//! This module defines the binning specification (`nbins` equal-width bins
//! over `[xmin, xmax)`) and the indexer used by every accumulator to map a
//! sample value to its bin.
//!
//! ## Design notes
//!
//! * **Half-open range**: `xmin` is inside bin 0, `xmax` is outside every bin.
//! * **Linear transform**: index is `(x - xmin) * norm * nbins` truncated toward
//!   zero, with `norm = 1 / (xmax - xmin)` computed once per fill.
//! * **Drop out-of-range samples**: values outside `[xmin, xmax)` and
//!   non-finite values map to `None`; they are never pulled into an edge bin.
//! * **Rounding at `xmax`**: a value that passed the range test but whose
//!   computed index rounds up to `nbins` is counted in the last bin.
//!
//! ## Invariants
//!
//! * `nbins > 0`, both bounds finite, `xmax > xmin`, and both the width and
//!   its reciprocal finite.
//! * Every index returned by [`BinIndexer::index`] is `< nbins`.
//! * `index(x)` is `Some` exactly when `xmin <= x < xmax`.
//!
//! ## Non-goals
//!
//! * Variable-width bins.
//! * Underflow/overflow bins.

use crate::primitives::errors::HistError;
use crate::primitives::validator::Validator;

// ============================================================================
// Binning Specification
// ============================================================================

/// `nbins` equal-width half-open bins covering `[xmin, xmax)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinningSpec {
    nbins: usize,
    xmin: f64,
    xmax: f64,
}

impl BinningSpec {
    /// Create a validated binning specification.
    pub fn new(nbins: usize, xmin: f64, xmax: f64) -> Result<Self, HistError> {
        Validator::validate_binning(nbins, xmin, xmax)?;
        Ok(Self { nbins, xmin, xmax })
    }

    /// Number of bins.
    #[inline]
    pub fn nbins(&self) -> usize {
        self.nbins
    }

    /// Lower edge (inclusive).
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper edge (exclusive).
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Width shared by all bins.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.xmax - self.xmin) / self.nbins as f64
    }

    /// The `nbins + 1` bin edges; the last edge is exactly `xmax`.
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        let mut edges: Vec<f64> = (0..self.nbins)
            .map(|i| self.xmin + i as f64 * width)
            .collect();
        edges.push(self.xmax);
        edges
    }

    /// Bin midpoints.
    pub fn centers(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.nbins)
            .map(|i| self.xmin + (i as f64 + 0.5) * width)
            .collect()
    }

    /// Build the indexer for this specification.
    #[inline]
    pub fn indexer(&self) -> BinIndexer {
        BinIndexer {
            xmin: self.xmin,
            xmax: self.xmax,
            norm: 1.0 / (self.xmax - self.xmin),
            nbins: self.nbins,
            nbins_f: self.nbins as f64,
        }
    }
}

// ============================================================================
// Bin Indexer
// ============================================================================

/// Precomputed linear transform from sample value to bin index.
#[derive(Debug, Clone, Copy)]
pub struct BinIndexer {
    xmin: f64,
    xmax: f64,
    norm: f64,
    nbins: usize,
    nbins_f: f64,
}

impl BinIndexer {
    /// Bin holding `x`, or `None` if `x` is outside `[xmin, xmax)` or not finite.
    ///
    /// A value a few ULP below `xmax` can round to index `nbins`; it is inside
    /// the range, so it goes to the last bin.
    #[inline(always)]
    pub fn index(&self, x: f64) -> Option<usize> {
        // Written as a negated conjunction so NaN is rejected.
        if !(x >= self.xmin && x < self.xmax) {
            return None;
        }
        let bin = ((x - self.xmin) * self.norm * self.nbins_f) as usize;
        Some(bin.min(self.nbins - 1))
    }
}
