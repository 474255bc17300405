//! Worker-thread configuration
//!
//! Every parallel elimination strategy runs on a fixed-size rayon pool.
//! The worker count is an explicit runtime value carried by
//! [`ParallelismConfig`], not a compile-time constant, so tests and
//! benchmarks can parameterize it.

use crate::error::{Error, Result};

/// Default worker count for parallel elimination strategies.
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Parallelism configuration for elimination kernels.
///
/// The same worker count applies to every strategy and every matrix size;
/// it is not adapted to the dimension or to available hardware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    num_threads: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            num_threads: DEFAULT_NUM_THREADS,
        }
    }
}

impl ParallelismConfig {
    /// Create a configuration with an explicit worker count.
    pub fn new(num_threads: usize) -> Self {
        Self { num_threads }
    }

    /// Configured worker count.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Build the worker pool for one elimination call.
    ///
    /// The pool is reused across all pivot steps of that call; each step's
    /// fork-join region still joins before the next step begins.
    pub(crate) fn build_pool(&self) -> Result<rayon::ThreadPool> {
        if self.num_threads == 0 {
            return Err(Error::invalid_argument(
                "num_threads",
                "worker count must be at least 1",
            ));
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .map_err(|e| Error::Backend(e.to_string()))
    }
}
