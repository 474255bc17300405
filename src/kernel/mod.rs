//! Elimination kernels
//!
//! One sequential reference kernel and five parallel variants of in-place
//! forward Gaussian elimination without pivoting. The variants share the
//! same two-phase structure per pivot step `k`:
//!
//! 1. **Normalization**: exactly one thread divides row `k` by its pivot.
//! 2. **Elimination**: rows `k+1..dim` are updated against row `k`, each
//!    row independently; the variants differ only in how those rows are
//!    distributed across workers (see [`crate::schedule`]).
//!
//! Every variant funnels through the same [`normalize_pivot_row`] and
//! [`eliminate_row`] helpers, so the per-element arithmetic order is
//! identical and results match the sequential reference bit for bit.
//!
//! There is no pivoting: a zero pivot divides through to NaN/Inf and the
//! corruption propagates silently. The benchmark compares scheduling
//! policies, not numerical robustness, so the gap stays open on purpose.

use std::fmt;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::parallelism::ParallelismConfig;

mod column_parallel;
mod row_parallel;
mod serial;

/// Work-distribution strategy for the elimination phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Sequential reference: rows updated one by one on the calling thread.
    Serial,
    /// Contiguous row blocks of roughly equal size, one per worker.
    EvenBlock,
    /// Rows dealt round-robin, one at a time, in a fixed interleave.
    Cyclic,
    /// Fixed-size row blocks pulled from a shared queue by idle workers.
    DynamicBlock,
    /// Like dynamic, but block sizes start large and shrink toward one.
    GuidedBlock,
    /// Inner column loop parallelized instead of the outer row loop.
    ///
    /// Not part of the default benchmark suite: it synchronizes once per
    /// row instead of once per step, and the overhead dominates.
    ColumnParallel,
}

impl Strategy {
    /// The strategies exercised by the default benchmark suite.
    ///
    /// [`Strategy::ColumnParallel`] is excluded: its per-row fork-join
    /// overhead keeps it out of the timed comparison.
    pub const ACTIVE: [Strategy; 5] = [
        Strategy::Serial,
        Strategy::EvenBlock,
        Strategy::Cyclic,
        Strategy::DynamicBlock,
        Strategy::GuidedBlock,
    ];

    /// Human-readable label used as the report banner.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Serial => "serial",
            Strategy::EvenBlock => "row-parallel (even blocks)",
            Strategy::Cyclic => "row-parallel (cyclic)",
            Strategy::DynamicBlock => "row-parallel (dynamic blocks)",
            Strategy::GuidedBlock => "row-parallel (guided blocks)",
            Strategy::ColumnParallel => "column-parallel",
        }
    }

    /// Whether the strategy runs on a worker pool.
    pub fn is_parallel(self) -> bool {
        self != Strategy::Serial
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Triangularize `matrix` in place with the given strategy.
///
/// Produces an upper triangular matrix with a unit diagonal. For any
/// strategy the result is bit-identical to [`Strategy::Serial`] on the
/// same input: row updates read only the finalized pivot row and write
/// only their own row, so no floating-point reordering occurs.
///
/// # Errors
///
/// For parallel strategies, fails if `parallelism` requests zero workers
/// or the worker pool cannot be built; [`Strategy::Serial`] never touches
/// the pool. Numerical degeneracy (a zero pivot) is not detected.
pub fn eliminate(
    matrix: &mut Matrix,
    strategy: Strategy,
    parallelism: &ParallelismConfig,
) -> Result<()> {
    match strategy {
        Strategy::Serial => {
            serial::eliminate_serial(matrix);
            Ok(())
        }
        Strategy::EvenBlock => in_pool(matrix, parallelism, row_parallel::even_block),
        Strategy::Cyclic => in_pool(matrix, parallelism, row_parallel::cyclic),
        Strategy::DynamicBlock => in_pool(matrix, parallelism, row_parallel::dynamic_block),
        Strategy::GuidedBlock => in_pool(matrix, parallelism, row_parallel::guided_block),
        Strategy::ColumnParallel => in_pool(matrix, parallelism, column_parallel::column),
    }
}

fn in_pool(
    matrix: &mut Matrix,
    parallelism: &ParallelismConfig,
    kernel: fn(&mut Matrix, &rayon::ThreadPool, usize),
) -> Result<()> {
    let pool = parallelism.build_pool()?;
    kernel(matrix, &pool, parallelism.num_threads());
    Ok(())
}

/// Phase 1 of step `k`: divide row `k` by its pivot, from column `k` on.
///
/// The pivot is captured before the loop, so the diagonal entry itself is
/// normalized to 1.0 first and later columns still divide by the original
/// pivot value.
pub(crate) fn normalize_pivot_row(row: &mut [f32], k: usize) {
    let pivot = row[k];
    for x in &mut row[k..] {
        *x /= pivot;
    }
}

/// Phase 2 of step `k` for one row below the pivot.
///
/// The factor is captured from column `k` before the row is touched; the
/// entry at column `k` is then zeroed explicitly rather than trusting the
/// subtraction to land on exact zero.
pub(crate) fn eliminate_row(row: &mut [f32], pivot_row: &[f32], k: usize) {
    let factor = row[k];
    for (x, p) in row[k + 1..].iter_mut().zip(&pivot_row[k + 1..]) {
        *x -= factor * *p;
    }
    row[k] = 0.0;
}
