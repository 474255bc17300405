//! Column-distributed elimination
//!
//! Parallelizes the inner column loop instead of the outer row loop: the
//! rows below the pivot are walked sequentially and each row's trailing
//! columns are split across workers. That forks and joins once per row
//! rather than once per step, which is why this variant sits outside the
//! default benchmark suite.

use rayon::prelude::*;
use rayon::ThreadPool;

use super::normalize_pivot_row;
use crate::matrix::Matrix;

pub(super) fn column(matrix: &mut Matrix, pool: &ThreadPool, workers: usize) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        let cols = dim - k - 1;
        let chunk_len = cols.div_ceil(workers).max(1);
        for row in below.chunks_exact_mut(dim) {
            let factor = row[k];
            let (leading, updated) = row.split_at_mut(k + 1);
            pool.install(|| {
                updated
                    .par_chunks_mut(chunk_len)
                    .zip(pivot_row[k + 1..].par_chunks(chunk_len))
                    .for_each(|(row_chunk, pivot_chunk)| {
                        for (x, p) in row_chunk.iter_mut().zip(pivot_chunk) {
                            *x -= factor * *p;
                        }
                    });
            });
            leading[k] = 0.0;
        }
    }
}
