//! Row-partition policies for the elimination phase
//!
//! At pivot step `k`, rows `k+1..dim` all need the same O(dim - k) update
//! and are independent of one another. The policies here decide which
//! worker touches which row. They are pure functions over `(rows, workers)`
//! so the partition invariant — every row covered exactly once — can be
//! tested without spinning up a pool.

use std::ops::Range;

/// Contiguous blocks of roughly equal size, one per worker.
///
/// The first `rows % workers` blocks get one extra row. Workers with no
/// rows are omitted, so every returned range is nonempty. `workers` must
/// be nonzero.
pub fn even_blocks(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let base = rows / workers;
    let extra = rows % workers;
    let mut blocks = Vec::with_capacity(workers.min(rows));
    let mut start = 0;
    for w in 0..workers {
        let len = base + usize::from(w < extra);
        if len == 0 {
            break;
        }
        blocks.push(start..start + len);
        start += len;
    }
    blocks
}

/// Round-robin assignment with a fixed interleave of one row.
///
/// Worker `w` receives rows `w, w + workers, w + 2 * workers, ...`.
/// Workers with no rows are omitted. `workers` must be nonzero.
pub fn cyclic_assignments(rows: usize, workers: usize) -> Vec<Vec<usize>> {
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); workers.min(rows)];
    for row in 0..rows {
        buckets[row % workers].push(row);
    }
    buckets
}

/// Block length for the dynamic policy: `ceil(rows / workers)`, floor 1.
///
/// Workers pull blocks of this fixed length from a shared queue as they
/// go idle, so a slower worker simply claims fewer blocks. `workers`
/// must be nonzero.
pub fn dynamic_block_len(rows: usize, workers: usize) -> usize {
    rows.div_ceil(workers).max(1)
}

/// Block lengths for the guided policy.
///
/// Each block takes `max(remaining / workers, 1)` rows, so lengths start
/// large and shrink toward 1 as the remaining count drops. The sequence
/// is non-increasing and sums to `rows`. `workers` must be nonzero.
pub fn guided_block_lens(rows: usize, workers: usize) -> Vec<usize> {
    let mut lens = Vec::new();
    let mut remaining = rows;
    while remaining > 0 {
        let len = (remaining / workers).max(1);
        lens.push(len);
        remaining -= len;
    }
    lens
}
