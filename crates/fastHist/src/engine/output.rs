//! Owned results returned by the high-level API.

use crate::math::binning::BinningSpec;
use crate::math::density::{densify, Density};
use crate::primitives::errors::HistError;

// ============================================================================
// Unweighted Result
// ============================================================================

/// Result of an unweighted fill.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramCounts {
    /// Number of samples per bin.
    pub counts: Vec<i64>,
    /// Binning the counts were filled with.
    pub spec: BinningSpec,
}

impl HistogramCounts {
    /// Number of samples that landed in any bin.
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }

    /// Poisson uncertainty per bin, `sqrt(count)`.
    pub fn errors(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| (c as f64).sqrt()).collect()
    }

    /// Bin edges, `nbins + 1` long.
    pub fn edges(&self) -> Vec<f64> {
        self.spec.edges()
    }

    /// Bin midpoints.
    pub fn centers(&self) -> Vec<f64> {
        self.spec.centers()
    }

    /// Normalize to unit integral; for counts `sumw2 == counts`.
    pub fn density(&self) -> Result<Density, HistError> {
        let heights: Vec<f64> = self.counts.iter().map(|&c| c as f64).collect();
        densify(&heights, &self.spec, Some(&heights))
    }
}

// ============================================================================
// Weighted Result
// ============================================================================

/// Result of a weighted fill.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedHistogram {
    /// Sum of weights per bin.
    pub sumw: Vec<f64>,
    /// Sum of squared weights per bin.
    pub sumw2: Vec<f64>,
    /// Binning the sums were filled with.
    pub spec: BinningSpec,
}

impl WeightedHistogram {
    /// Sum of weights over all bins.
    pub fn total(&self) -> f64 {
        self.sumw.iter().sum()
    }

    /// Statistical uncertainty per bin, `sqrt(sumw2)`.
    pub fn errors(&self) -> Vec<f64> {
        self.sumw2.iter().map(|w2| w2.sqrt()).collect()
    }

    /// Bin edges, `nbins + 1` long.
    pub fn edges(&self) -> Vec<f64> {
        self.spec.edges()
    }

    /// Bin midpoints.
    pub fn centers(&self) -> Vec<f64> {
        self.spec.centers()
    }

    /// Normalize to unit integral, propagating `sumw2` into the uncertainties.
    pub fn density(&self) -> Result<Density, HistError> {
        densify(&self.sumw, &self.spec, Some(&self.sumw2))
    }
}
