//! # fastHist
//!
//! Uniform-binned one-dimensional histograms over large numeric arrays,
//! optionally weighted, with a serial and a rayon-parallel execution path.
//!
//! Samples are mapped to `nbins` equal-width half-open bins covering
//! `[xmin, xmax)`. Samples outside that range, including NaN and infinities,
//! are dropped silently. Weighted fills record the per-bin sum of weights and
//! the per-bin sum of squared weights, from which `sqrt(sumw2)` gives the
//! statistical uncertainty.
//!
//! ## Quick start
//!
//! ```rust
//! use fastHist::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 2.5, 3.0];
//! let w = vec![1.0, 1.0, 1.0, 2.0, 5.0];
//!
//! let hist = Histogram::new().bins(3).range(0.0, 3.0).build()?;
//!
//! let counts = hist.fill(&x)?;
//! assert_eq!(counts.counts, vec![1, 1, 2]);
//!
//! let weighted = hist.fill_weighted(&x, &w)?;
//! assert_eq!(weighted.sumw, vec![1.0, 1.0, 3.0]);
//! assert_eq!(weighted.sumw2, vec![1.0, 1.0, 5.0]);
//! # Ok::<(), HistError>(())
//! ```
//!
//! ## Parallel fills
//!
//! Parallel fills split the samples into one contiguous block per worker.
//! Each worker accumulates into private buffers and merges them into the
//! shared result once, under a lock. Unweighted counts are bit-identical to a
//! serial fill. Weighted sums depend on floating summation order and agree
//! with a serial fill only up to rounding.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API: builder, processor, free entry points
//!   ↓
//! Layer 4: Input: slice/Vec/ndarray adapters
//!   ↓
//! Layer 3: Engine: serial and parallel accumulators, results
//!   ↓
//! Layer 2: Math: binning, indexing, density
//!   ↓
//! Layer 1: Primitives: errors, parallelism hint, validation
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): rayon-parallel kernels and ndarray inputs. Without it the
//!   parallel entry points run the serial kernels.

#![allow(non_snake_case)]
#![deny(missing_docs)]

/// Layer 1: errors, parallelism hint and validation.
pub mod primitives;

/// Layer 2: binning and density math.
pub mod math;

/// Layer 3: accumulation kernels and results.
pub mod engine;

/// Layer 4: input adapters.
pub mod input;

/// Layer 5: builder and entry points.
pub mod api;

/// Commonly used items.
pub mod prelude {
    pub use crate::api::{
        histogram_unweighted, histogram_unweighted_parallel, histogram_weighted,
        histogram_weighted_parallel, HistogramBuilder, HistogramBuilder as Histogram,
        UniformHistogram,
    };
    pub use crate::engine::output::{HistogramCounts, WeightedHistogram};
    pub use crate::input::HistInput;
    pub use crate::math::binning::BinningSpec;
    pub use crate::math::density::Density;
    pub use crate::primitives::errors::HistError;
    pub use crate::primitives::parallelism::Parallelism;
}
