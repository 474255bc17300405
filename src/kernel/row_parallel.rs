//! Row-distributed elimination variants
//!
//! All four variants fork one task set per pivot step inside a shared
//! worker pool; `pool.scope` joins every task before the next step's
//! normalization, which is the barrier the data dependence requires.
//! Worker disjointness is structural: rows reach a worker either as a
//! sub-slice split off the tail (`split_at_mut`) or as `&mut` row handles
//! moved out of a queue that yields each block exactly once.

use std::collections::VecDeque;
use std::mem;
use std::sync::Mutex;

use rayon::ThreadPool;

use super::{eliminate_row, normalize_pivot_row};
use crate::matrix::Matrix;
use crate::schedule;

/// Contiguous blocks of roughly equal size, one per worker, assigned once
/// per step.
pub(super) fn even_block(matrix: &mut Matrix, pool: &ThreadPool, workers: usize) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        let blocks = schedule::even_blocks(dim - k - 1, workers);
        pool.scope(|s| {
            let mut rest = below;
            for block in blocks {
                let (chunk, tail) = mem::take(&mut rest).split_at_mut(block.len() * dim);
                rest = tail;
                s.spawn(move |_| {
                    for row in chunk.chunks_exact_mut(dim) {
                        eliminate_row(row, pivot_row, k);
                    }
                });
            }
        });
    }
}

/// Rows dealt round-robin, one at a time: worker `w` takes rows
/// `w, w + workers, w + 2 * workers, ...` of the step's tail.
pub(super) fn cyclic(matrix: &mut Matrix, pool: &ThreadPool, workers: usize) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        let mut buckets: Vec<Vec<&mut [f32]>> = Vec::new();
        buckets.resize_with(workers, Vec::new);
        for (i, row) in below.chunks_exact_mut(dim).enumerate() {
            buckets[i % workers].push(row);
        }
        pool.scope(|s| {
            for bucket in buckets {
                s.spawn(move |_| {
                    for row in bucket {
                        eliminate_row(row, pivot_row, k);
                    }
                });
            }
        });
    }
}

/// Fixed-size blocks pulled from a shared queue; an idle worker claims the
/// next block, so slower workers end up with fewer of them.
pub(super) fn dynamic_block(matrix: &mut Matrix, pool: &ThreadPool, workers: usize) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        let block_len = schedule::dynamic_block_len(dim - k - 1, workers);
        let queue = Mutex::new(below.chunks_mut(block_len * dim));
        pool.scope(|s| {
            for _ in 0..workers {
                let queue = &queue;
                s.spawn(move |_| loop {
                    let block = queue.lock().expect("block queue poisoned").next();
                    let Some(block) = block else { break };
                    for row in block.chunks_exact_mut(dim) {
                        eliminate_row(row, pivot_row, k);
                    }
                });
            }
        });
    }
}

/// Shrinking blocks pulled from a shared queue: large blocks amortize
/// queue traffic early, single-row blocks even out the finish.
pub(super) fn guided_block(matrix: &mut Matrix, pool: &ThreadPool, workers: usize) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        let lens = schedule::guided_block_lens(dim - k - 1, workers);
        let mut blocks = VecDeque::with_capacity(lens.len());
        let mut rest = below;
        for len in lens {
            let (chunk, tail) = mem::take(&mut rest).split_at_mut(len * dim);
            rest = tail;
            blocks.push_back(chunk);
        }
        let queue = Mutex::new(blocks);
        pool.scope(|s| {
            for _ in 0..workers {
                let queue = &queue;
                s.spawn(move |_| loop {
                    let block = queue.lock().expect("block queue poisoned").pop_front();
                    let Some(block) = block else { break };
                    for row in block.chunks_exact_mut(dim) {
                        eliminate_row(row, pivot_row, k);
                    }
                });
            }
        });
    }
}
