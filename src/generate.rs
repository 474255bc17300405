//! Test-matrix generators
//!
//! The benchmark driver does not care about numerical realism; it needs
//! matrices that give the elimination kernels work. The patterns here
//! mirror that: integer-valued entries in a small range, with enough
//! structure to keep pivots away from zero.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::Matrix;

/// Fill `matrix` with the benchmark test pattern.
///
/// For row `i`: columns `j < i` are `0.0`, the diagonal is `1.0`, and
/// columns `j > i` are pseudo-random integers in `[0, 100)` cast to `f32`.
/// The result is already upper triangular with a unit diagonal, so
/// elimination runs its full O(n^3) loop structure over it without any
/// pivot ever leaving 1.0.
///
/// The generator reseeds from the current wall-clock time on every call,
/// at second granularity; calls within the same clock tick repeat the
/// fill. Callers that need distinct fills pass explicit seeds instead.
pub fn fill_test_pattern(matrix: &mut Matrix) {
    fill_seeded_test_pattern(matrix, clock_seed());
}

/// Deterministic variant of [`fill_test_pattern`] with an explicit seed.
pub fn fill_seeded_test_pattern(matrix: &mut Matrix, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dim = matrix.dim();
    for i in 0..dim {
        let row = matrix.row_mut(i);
        for x in &mut row[..i] {
            *x = 0.0;
        }
        row[i] = 1.0;
        for x in &mut row[i + 1..] {
            *x = rng.random_range(0..100u32) as f32;
        }
    }
}

/// Allocate and fill a fresh benchmark test matrix for dimension `dim`.
pub fn test_matrix(dim: usize) -> Matrix {
    let mut m = Matrix::zeros(dim);
    fill_test_pattern(&mut m);
    m
}

/// Seeded variant of [`test_matrix`].
pub fn seeded_test_matrix(dim: usize, seed: u64) -> Matrix {
    let mut m = Matrix::zeros(dim);
    fill_seeded_test_pattern(&mut m, seed);
    m
}

/// Generate a fully populated, diagonally dominant matrix.
///
/// Off-diagonal entries are pseudo-random integers in `[0, 100)`; the
/// diagonal is `100 * dim` plus such an integer, which keeps every pivot
/// strictly positive through all elimination steps. Unlike
/// [`test_matrix`], the region below the diagonal is nonzero, so the
/// elimination phase does real arithmetic — this is the input the
/// cross-variant parity tests use.
pub fn dense_test_matrix(dim: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::zeros(dim);
    for i in 0..dim {
        let row = m.row_mut(i);
        for (j, x) in row.iter_mut().enumerate() {
            let v = rng.random_range(0..100u32) as f32;
            *x = if j == i { 100.0 * dim as f32 + v } else { v };
        }
    }
    m
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
