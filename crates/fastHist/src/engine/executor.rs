//! Serial and parallel histogram accumulators.
//!
//! ## Purpose
//!
//! This module implements the four fill kernels: unweighted and weighted,
//! each in a serial and a thread-parallel flavour. Callers are expected to
//! have validated the binning and buffer lengths (see the API layer); the
//! kernels only debug-assert them.
//!
//! ## Design notes
//!
//! * **Private accumulation**: each parallel worker owns zeroed `nbins`-long
//!   buffers and never touches the shared result while accumulating.
//! * **Scoped merge**: a worker adds its private buffers into the shared result
//!   exactly once, inside a `parking_lot::Mutex` critical section. The weighted
//!   kernel guards `sumw` and `sumw2` with the same lock so two merges never
//!   interleave.
//! * **Blocking**: the sample range is split into one contiguous block per
//!   worker; rayon schedules the blocks on its pool.
//! * **Generics**: samples and weights are any primitive numeric type
//!   convertible to `f64`.
//!
//! ## Invariants
//!
//! * Result buffers are zeroed before anything is added.
//! * Unweighted parallel results are bit-identical to serial results.
//! * Weighted parallel results depend on the floating summation order and may
//!   differ from serial results in the last few ULP.
//!
//! ## Non-goals
//!
//! * Input validation (handled by `Validator`).
//! * Incremental filling across calls.

// Feature-gated imports
#[cfg(feature = "cpu")]
use parking_lot::Mutex;
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use rayon::{ThreadPool, ThreadPoolBuilder};
#[cfg(feature = "cpu")]
use std::sync::Arc;

// External dependencies
#[cfg(feature = "cpu")]
use log::{debug, trace};
use num_traits::AsPrimitive;

// Internal dependencies
use crate::math::binning::{BinIndexer, BinningSpec};
#[cfg(feature = "cpu")]
use crate::primitives::errors::HistError;

// ============================================================================
// Accumulation Loops
// ============================================================================

#[inline]
fn accumulate_counts<T>(samples: &[T], indexer: &BinIndexer, counts: &mut [i64])
where
    T: AsPrimitive<f64>,
{
    for &x in samples {
        if let Some(bin) = indexer.index(x.as_()) {
            counts[bin] += 1;
        }
    }
}

#[inline]
fn accumulate_weighted<T, W>(
    samples: &[T],
    weights: &[W],
    indexer: &BinIndexer,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) where
    T: AsPrimitive<f64>,
    W: AsPrimitive<f64>,
{
    for (&x, &w) in samples.iter().zip(weights) {
        if let Some(bin) = indexer.index(x.as_()) {
            let w: f64 = w.as_();
            sumw[bin] += w;
            sumw2[bin] += w * w;
        }
    }
}

// ============================================================================
// Serial Kernels
// ============================================================================

/// Fill `counts` with the number of samples in each bin.
pub fn fill_serial<T>(samples: &[T], spec: &BinningSpec, counts: &mut [i64])
where
    T: AsPrimitive<f64>,
{
    debug_assert_eq!(counts.len(), spec.nbins());

    counts.fill(0);
    accumulate_counts(samples, &spec.indexer(), counts);
}

/// Fill `sumw` and `sumw2` with the per-bin sum of weights and of squared weights.
pub fn fill_weighted_serial<T, W>(
    samples: &[T],
    weights: &[W],
    spec: &BinningSpec,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) where
    T: AsPrimitive<f64>,
    W: AsPrimitive<f64>,
{
    debug_assert_eq!(samples.len(), weights.len());
    debug_assert_eq!(sumw.len(), spec.nbins());
    debug_assert_eq!(sumw2.len(), spec.nbins());

    sumw.fill(0.0);
    sumw2.fill(0.0);
    accumulate_weighted(samples, weights, &spec.indexer(), sumw, sumw2);
}

// ============================================================================
// Parallel Kernels
// ============================================================================

/// Length of each worker's contiguous block when `n` samples are split `n_blocks` ways.
#[inline]
pub fn block_len(n: usize, n_blocks: usize) -> usize {
    n.div_ceil(n_blocks.max(1)).max(1)
}

/// Parallel counterpart of [`fill_serial`], split into `n_blocks` worker blocks.
#[cfg(feature = "cpu")]
pub fn fill_parallel<T>(samples: &[T], spec: &BinningSpec, n_blocks: usize, counts: &mut [i64])
where
    T: AsPrimitive<f64> + Sync,
{
    debug_assert_eq!(counts.len(), spec.nbins());

    counts.fill(0);
    if samples.is_empty() {
        return;
    }

    let indexer = spec.indexer();
    let nbins = spec.nbins();
    let block = block_len(samples.len(), n_blocks);
    debug!(
        "parallel fill: {} samples, {} bins, block length {}",
        samples.len(),
        nbins,
        block
    );

    let shared = Mutex::new(counts);

    samples.par_chunks(block).for_each(|chunk| {
        let mut private = vec![0i64; nbins];
        accumulate_counts(chunk, &indexer, &mut private);

        let mut shared = shared.lock();
        trace!("merging block of {} samples", chunk.len());
        for (dst, src) in shared.iter_mut().zip(&private) {
            *dst += *src;
        }
    });
}

/// Parallel counterpart of [`fill_weighted_serial`], split into `n_blocks` worker blocks.
///
/// The merge order is whatever order workers finish in, so the floating
/// sums are reproducible only up to rounding.
#[cfg(feature = "cpu")]
pub fn fill_weighted_parallel<T, W>(
    samples: &[T],
    weights: &[W],
    spec: &BinningSpec,
    n_blocks: usize,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) where
    T: AsPrimitive<f64> + Sync,
    W: AsPrimitive<f64> + Sync,
{
    debug_assert_eq!(samples.len(), weights.len());
    debug_assert_eq!(sumw.len(), spec.nbins());
    debug_assert_eq!(sumw2.len(), spec.nbins());

    sumw.fill(0.0);
    sumw2.fill(0.0);
    if samples.is_empty() {
        return;
    }

    let indexer = spec.indexer();
    let nbins = spec.nbins();
    let block = block_len(samples.len(), n_blocks);
    debug!(
        "parallel weighted fill: {} samples, {} bins, block length {}",
        samples.len(),
        nbins,
        block
    );

    // One lock for both buffers.
    let shared = Mutex::new((sumw, sumw2));

    samples
        .par_chunks(block)
        .zip(weights.par_chunks(block))
        .for_each(|(xs, ws)| {
            let mut sumw_priv = vec![0.0f64; nbins];
            let mut sumw2_priv = vec![0.0f64; nbins];
            accumulate_weighted(xs, ws, &indexer, &mut sumw_priv, &mut sumw2_priv);

            let mut guard = shared.lock();
            let (sumw, sumw2) = &mut *guard;
            trace!("merging weighted block of {} samples", xs.len());
            for (dst, src) in sumw.iter_mut().zip(&sumw_priv) {
                *dst += *src;
            }
            for (dst, src) in sumw2.iter_mut().zip(&sumw2_priv) {
                *dst += *src;
            }
        });
}

/// Build a dedicated pool with `n_threads` workers.
///
/// Returns `None` when the current pool already has that many threads, or
/// when `n_threads` is `0` (use the current pool).
#[cfg(feature = "cpu")]
pub fn build_pool(n_threads: usize) -> Result<Option<Arc<ThreadPool>>, HistError> {
    if n_threads == 0 || n_threads == rayon::current_num_threads() {
        return Ok(None);
    }

    debug!("building dedicated pool with {} threads", n_threads);
    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()
        .map_err(|e| HistError::ThreadPool(e.to_string()))?;
    Ok(Some(Arc::new(pool)))
}

// Sequential fallbacks (when cpu feature is not enabled)

/// Serial stand-in for the parallel unweighted kernel.
#[cfg(not(feature = "cpu"))]
pub fn fill_parallel<T>(samples: &[T], spec: &BinningSpec, _n_blocks: usize, counts: &mut [i64])
where
    T: AsPrimitive<f64> + Sync,
{
    fill_serial(samples, spec, counts);
}

/// Serial stand-in for the parallel weighted kernel.
#[cfg(not(feature = "cpu"))]
pub fn fill_weighted_parallel<T, W>(
    samples: &[T],
    weights: &[W],
    spec: &BinningSpec,
    _n_blocks: usize,
    sumw: &mut [f64],
    sumw2: &mut [f64],
) where
    T: AsPrimitive<f64> + Sync,
    W: AsPrimitive<f64> + Sync,
{
    fill_weighted_serial(samples, weights, spec, sumw, sumw2);
}
