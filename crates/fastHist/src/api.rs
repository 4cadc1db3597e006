//! High-level API for uniform-binned histograms.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder that
//! produces a reusable [`UniformHistogram`] processor, and four free functions
//! writing into caller-owned buffers. Both select the serial or parallel,
//! weighted or unweighted kernel from the engine layer.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything except the range.
//! * **Validated**: Binning is validated at `build()`; buffer lengths are checked
//!   on every fill, before any result buffer is written.
//! * **Self-correcting**: The builder path downgrades to serial execution when
//!   the input is too small for parallel blocks to pay off. The `*_parallel`
//!   free functions always run the parallel kernels.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HistogramBuilder`] via `Histogram::new()`.
//! 2. Chain configuration methods (`.bins()`, `.range()`, `.parallel()`, `.threads()`).
//! 3. Call `.build()` and fill with `.fill(&x)` or `.fill_weighted(&x, &w)`.

// External dependencies
use log::debug;
use num_traits::AsPrimitive;
#[cfg(feature = "cpu")]
use rayon::ThreadPool;
#[cfg(feature = "cpu")]
use std::sync::Arc;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::build_pool;
use crate::engine::executor::{
    fill_parallel, fill_serial, fill_weighted_parallel, fill_weighted_serial,
};
use crate::engine::output::{HistogramCounts, WeightedHistogram};
use crate::input::HistInput;
use crate::math::binning::BinningSpec;
use crate::primitives::errors::HistError;
use crate::primitives::parallelism::Parallelism;
use crate::primitives::validator::Validator;

/// Fewest samples a parallel worker is given before the builder path falls
/// back to fewer workers or to serial execution.
pub const MIN_SAMPLES_PER_THREAD: usize = 16_384;

/// Bin count used when `.bins()` is not called.
pub const DEFAULT_BINS: usize = 10;

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`UniformHistogram`].
#[derive(Debug, Clone, Default)]
pub struct HistogramBuilder {
    /// Number of bins (defaults to [`DEFAULT_BINS`]).
    pub nbins: Option<usize>,
    /// Half-open range `[xmin, xmax)`; required.
    pub range: Option<(f64, f64)>,
    /// Parallel execution (defaults to true).
    pub parallel: Option<bool>,
    /// Worker thread count; `0` or unset uses rayon's current pool.
    pub threads: Option<usize>,
}

impl HistogramBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bins.
    pub fn bins(mut self, nbins: usize) -> Self {
        self.nbins = Some(nbins);
        self
    }

    /// Set the binning range `[xmin, xmax)`.
    pub fn range(mut self, xmin: f64, xmax: f64) -> Self {
        self.range = Some((xmin, xmax));
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set the worker thread count for parallel fills.
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.threads = Some(n_threads);
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<UniformHistogram, HistError> {
        let (xmin, xmax) = self.range.ok_or(HistError::MissingParameter("range"))?;
        let spec = BinningSpec::new(self.nbins.unwrap_or(DEFAULT_BINS), xmin, xmax)?;

        let threads = self.threads.unwrap_or(0);
        let parallelism = if self.parallel.unwrap_or(true) {
            Parallelism::from_threads(threads)
        } else {
            Parallelism::Sequential
        };

        Ok(UniformHistogram {
            spec,
            parallelism,
            #[cfg(feature = "cpu")]
            pool: if parallelism.allows_parallel() {
                build_pool(threads)?
            } else {
                None
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Validated histogram configuration, reusable across fills.
///
/// With an explicit thread count the worker pool is created once here and
/// shared by every fill (and every clone).
#[derive(Debug, Clone)]
pub struct UniformHistogram {
    spec: BinningSpec,
    parallelism: Parallelism,
    #[cfg(feature = "cpu")]
    pool: Option<Arc<ThreadPool>>,
}

impl UniformHistogram {
    /// Binning used by every fill.
    pub fn spec(&self) -> &BinningSpec {
        &self.spec
    }

    /// Configured parallelism hint, before workload correction.
    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Count samples per bin.
    pub fn fill<T, I>(&self, x: &I) -> Result<HistogramCounts, HistError>
    where
        T: AsPrimitive<f64> + Sync,
        I: HistInput<T> + ?Sized,
    {
        let samples = x.as_hist_slice()?;
        let mut counts = vec![0i64; self.spec.nbins()];
        self.fill_into(samples, &mut counts)?;
        Ok(HistogramCounts {
            counts,
            spec: self.spec,
        })
    }

    /// Accumulate per-bin sum of weights and sum of squared weights.
    pub fn fill_weighted<T, W, I1, I2>(
        &self,
        x: &I1,
        w: &I2,
    ) -> Result<WeightedHistogram, HistError>
    where
        T: AsPrimitive<f64> + Sync,
        W: AsPrimitive<f64> + Sync,
        I1: HistInput<T> + ?Sized,
        I2: HistInput<W> + ?Sized,
    {
        let samples = x.as_hist_slice()?;
        let weights = w.as_hist_slice()?;
        let mut sumw = vec![0.0; self.spec.nbins()];
        let mut sumw2 = vec![0.0; self.spec.nbins()];
        self.fill_weighted_into(samples, weights, &mut sumw, &mut sumw2)?;
        Ok(WeightedHistogram {
            sumw,
            sumw2,
            spec: self.spec,
        })
    }

    /// Count samples per bin into a caller-owned buffer of length `nbins`.
    pub fn fill_into<T>(&self, samples: &[T], counts: &mut [i64]) -> Result<(), HistError>
    where
        T: AsPrimitive<f64> + Sync,
    {
        Validator::validate_output(self.spec.nbins(), counts.len())?;

        let strategy = self.strategy(samples.len());
        if strategy.allows_parallel() {
            let spec = &self.spec;
            self.run(move || fill_parallel(samples, spec, strategy.n_threads(), counts));
        } else {
            fill_serial(samples, &self.spec, counts);
        }
        Ok(())
    }

    /// Weighted fill into caller-owned buffers of length `nbins`.
    pub fn fill_weighted_into<T, W>(
        &self,
        samples: &[T],
        weights: &[W],
        sumw: &mut [f64],
        sumw2: &mut [f64],
    ) -> Result<(), HistError>
    where
        T: AsPrimitive<f64> + Sync,
        W: AsPrimitive<f64> + Sync,
    {
        Validator::validate_weights(samples.len(), weights.len())?;
        Validator::validate_output(self.spec.nbins(), sumw.len())?;
        Validator::validate_output(self.spec.nbins(), sumw2.len())?;

        let strategy = self.strategy(samples.len());
        if strategy.allows_parallel() {
            let spec = &self.spec;
            self.run(move || {
                fill_weighted_parallel(samples, weights, spec, strategy.n_threads(), sumw, sumw2)
            });
        } else {
            fill_weighted_serial(samples, weights, &self.spec, sumw, sumw2);
        }
        Ok(())
    }

    fn strategy(&self, n_samples: usize) -> Parallelism {
        let strategy = self
            .parallelism
            .correct_for_workload(n_samples, MIN_SAMPLES_PER_THREAD);
        debug!(
            "fill of {} samples: requested {:?}, using {:?}",
            n_samples, self.parallelism, strategy
        );
        strategy
    }

    #[cfg(feature = "cpu")]
    fn run<F>(&self, op: F)
    where
        F: FnOnce() + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    #[cfg(not(feature = "cpu"))]
    fn run<F>(&self, op: F)
    where
        F: FnOnce() + Send,
    {
        op()
    }
}

// ============================================================================
// Free Entry Points
// ============================================================================

/// Serial unweighted histogram of `samples` into `counts` (length `nbins`).
pub fn histogram_unweighted<T>(
    samples: &[T],
    nbins: usize,
    xmin: f64,
    xmax: f64,
    counts: &mut [i64],
) -> Result<(), HistError>
where
    T: AsPrimitive<f64>,
{
    let spec = BinningSpec::new(nbins, xmin, xmax)?;
    Validator::validate_output(nbins, counts.len())?;
    fill_serial(samples, &spec, counts);
    Ok(())
}

/// Serial weighted histogram into `sumw` and `sumw2` (each length `nbins`).
pub fn histogram_weighted<T, W>(
    samples: &[T],
    weights: &[W],
    nbins: usize,
    xmin: f64,
    xmax: f64,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) -> Result<(), HistError>
where
    T: AsPrimitive<f64>,
    W: AsPrimitive<f64>,
{
    let spec = BinningSpec::new(nbins, xmin, xmax)?;
    Validator::validate_weights(samples.len(), weights.len())?;
    Validator::validate_output(nbins, sumw.len())?;
    Validator::validate_output(nbins, sumw2.len())?;
    fill_weighted_serial(samples, weights, &spec, sumw, sumw2);
    Ok(())
}

/// Parallel unweighted histogram, one block per thread of the current pool.
pub fn histogram_unweighted_parallel<T>(
    samples: &[T],
    nbins: usize,
    xmin: f64,
    xmax: f64,
    counts: &mut [i64],
) -> Result<(), HistError>
where
    T: AsPrimitive<f64> + Sync,
{
    let spec = BinningSpec::new(nbins, xmin, xmax)?;
    Validator::validate_output(nbins, counts.len())?;
    let n_blocks = Parallelism::from_threads(0).n_threads();
    fill_parallel(samples, &spec, n_blocks, counts);
    Ok(())
}

/// Parallel weighted histogram, one block per thread of the current pool.
pub fn histogram_weighted_parallel<T, W>(
    samples: &[T],
    weights: &[W],
    nbins: usize,
    xmin: f64,
    xmax: f64,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) -> Result<(), HistError>
where
    T: AsPrimitive<f64> + Sync,
    W: AsPrimitive<f64> + Sync,
{
    let spec = BinningSpec::new(nbins, xmin, xmax)?;
    Validator::validate_weights(samples.len(), weights.len())?;
    Validator::validate_output(nbins, sumw.len())?;
    Validator::validate_output(nbins, sumw2.len())?;
    let n_blocks = Parallelism::from_threads(0).n_threads();
    fill_weighted_parallel(samples, weights, &spec, n_blocks, sumw, sumw2);
    Ok(())
}
