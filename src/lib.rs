//! # elimr
//!
//! **Scheduling-policy benchmarks for dense Gaussian elimination.**
//!
//! elimr triangularizes an NxN single-precision matrix in place with
//! forward elimination (no pivoting) and measures how five
//! work-distribution policies for the elimination phase compare against
//! the sequential reference on a fixed worker count.
//!
//! ## What it provides
//!
//! - **Kernels**: one sequential reference and five parallel variants that
//!   differ only in how rows below the pivot are partitioned across
//!   workers — even contiguous blocks, round-robin single rows, a dynamic
//!   block queue, a guided shrinking-block queue, and an inner-loop
//!   column split
//! - **Determinism**: every variant matches the sequential reference bit
//!   for bit on the same input, because only independent row updates are
//!   distributed and no summation order changes
//! - **Harness**: a driver that sweeps a fixed size list, averages three
//!   runs per strategy, and prints plain-text timing lines
//!
//! ## Quick start
//!
//! ```rust
//! use elimr::prelude::*;
//!
//! let mut m = elimr::generate::seeded_test_matrix(64, 7);
//! eliminate(&mut m, Strategy::EvenBlock, &ParallelismConfig::new(4))?;
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Known limitation
//!
//! There is no pivoting. A zero pivot divides through to NaN/Inf and the
//! corruption propagates silently, identically in every variant. The
//! benchmark generators never produce a zero pivot; arbitrary input can.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bench;
pub mod error;
pub mod generate;
pub mod kernel;
pub mod matrix;
pub mod parallelism;
pub mod schedule;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bench::BenchConfig;
    pub use crate::error::{Error, Result};
    pub use crate::kernel::{eliminate, Strategy};
    pub use crate::matrix::Matrix;
    pub use crate::parallelism::ParallelismConfig;
}
