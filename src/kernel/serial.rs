//! Sequential reference elimination
//!
//! O(dim^3), single-threaded. This is the correctness baseline the
//! parallel variants must match bit for bit.

use super::{eliminate_row, normalize_pivot_row};
use crate::matrix::Matrix;

pub(super) fn eliminate_serial(matrix: &mut Matrix) {
    let dim = matrix.dim();
    for k in 0..dim {
        normalize_pivot_row(matrix.row_mut(k), k);
        let (pivot_row, below) = matrix.pivot_split(k);
        for row in below.chunks_exact_mut(dim) {
            eliminate_row(row, pivot_row, k);
        }
    }
}
