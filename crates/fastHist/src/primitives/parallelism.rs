//! Parallelism hint for histogram filling.
//!
//! A single [`Parallelism`] value travels from the builder to the executor.
//! The executor may downgrade it when the input is too small to amortize
//! spawning workers and merging their private buffers.

/// Execution strategy for a fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Single pass on the calling thread.
    #[default]
    Sequential,
    /// Split the samples into up to `n` blocks, one private accumulator each.
    ///
    /// If `n <= 1`, this is equivalent to `Sequential`.
    Parallel(usize),
}

impl Parallelism {
    /// Create a parallelism hint from a thread count.
    ///
    /// - `0` → rayon's current thread count (hardware concurrency by default)
    /// - `1` → sequential
    /// - `n > 1` → parallel with n threads
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        match n_threads {
            0 => Self::Parallel(available_threads()),
            1 => Self::Sequential,
            n => Self::Parallel(n),
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn allows_parallel(self) -> bool {
        matches!(self, Self::Parallel(n) if n > 1)
    }

    /// Returns the thread count hint (1 for sequential).
    #[inline]
    pub fn n_threads(self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Parallel(n) => n.max(1),
        }
    }

    /// Downgrade to fewer workers (or sequential) when each worker would get
    /// fewer than `min_items_per_thread` samples.
    #[inline]
    pub fn correct_for_workload(self, n_items: usize, min_items_per_thread: usize) -> Self {
        match self {
            Self::Sequential => Self::Sequential,
            Self::Parallel(n) => {
                let effective_threads = n.min(n_items / min_items_per_thread.max(1)).max(1);
                if effective_threads <= 1 {
                    Self::Sequential
                } else {
                    Self::Parallel(effective_threads)
                }
            }
        }
    }
}

#[cfg(feature = "cpu")]
fn available_threads() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "cpu"))]
fn available_threads() -> usize {
    1
}
