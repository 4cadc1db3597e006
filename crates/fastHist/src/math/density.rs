//! Density normalization of filled histograms.
//!
//! Scales bin heights so that the histogram integrates to one over its range.
//! When per-bin `sumw2` is available the uncertainty of each normalized bin is
//! propagated including the correlation introduced by dividing by the total:
//!
//! ```text
//! density[i]     = h[i] / (width * H)
//! uncertainty[i] = sqrt(sumw2[i] + (h[i] / H)^2 * Σ sumw2) / (width * H)
//! ```
//!
//! where `H = Σ h`.

use crate::math::binning::BinningSpec;
use crate::primitives::errors::HistError;

/// Normalized bin heights and, if requested, their uncertainties.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    /// Normalized heights; `Σ heights * width == 1`.
    pub heights: Vec<f64>,
    /// Per-bin uncertainty of `heights`, present when `sumw2` was supplied.
    pub uncertainties: Option<Vec<f64>>,
}

/// Normalize `heights` over `spec`, propagating `sumw2` when given.
pub fn densify(
    heights: &[f64],
    spec: &BinningSpec,
    sumw2: Option<&[f64]>,
) -> Result<Density, HistError> {
    if heights.len() != spec.nbins() {
        return Err(HistError::InvalidInput(format!(
            "expected {} bin heights, got {}",
            spec.nbins(),
            heights.len()
        )));
    }
    if let Some(sumw2) = sumw2 {
        if sumw2.len() != heights.len() {
            return Err(HistError::InvalidInput(format!(
                "sumw2 has {} bins, heights have {}",
                sumw2.len(),
                heights.len()
            )));
        }
    }

    let raw_integral: f64 = heights.iter().sum();
    if raw_integral == 0.0 {
        return Err(HistError::EmptyHistogram);
    }

    let scale = spec.bin_width() * raw_integral;
    let normed = heights.iter().map(|&h| h / scale).collect();

    let uncertainties = sumw2.map(|sumw2| {
        let total_sumw2: f64 = sumw2.iter().sum();
        heights
            .iter()
            .zip(sumw2)
            .map(|(&h, &w2)| {
                let frac = h / raw_integral;
                (w2 + frac * frac * total_sumw2).sqrt() / scale
            })
            .collect()
    });

    Ok(Density {
        heights: normed,
        uncertainties,
    })
}
