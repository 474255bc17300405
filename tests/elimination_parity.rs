//! Cross-variant parity tests
//!
//! Every parallel strategy must produce results bit-identical to the
//! sequential reference: only independent row updates are distributed, so
//! no floating-point operation is reordered. These tests compare raw bit
//! patterns, not approximate values.

use elimr::generate;
use elimr::kernel::{eliminate, Strategy};
use elimr::matrix::Matrix;
use elimr::parallelism::ParallelismConfig;

const PARALLEL_STRATEGIES: [Strategy; 5] = [
    Strategy::EvenBlock,
    Strategy::Cyclic,
    Strategy::DynamicBlock,
    Strategy::GuidedBlock,
    Strategy::ColumnParallel,
];

fn bits(m: &Matrix) -> Vec<u32> {
    m.as_slice().iter().map(|x| x.to_bits()).collect()
}

fn eliminated(mut m: Matrix, strategy: Strategy, threads: usize) -> Matrix {
    eliminate(&mut m, strategy, &ParallelismConfig::new(threads)).unwrap();
    m
}

#[test]
fn test_parity_on_dense_matrices() {
    // Sizes chosen so the row count per step is frequently not divisible
    // by the worker count.
    for dim in [1, 2, 3, 5, 8, 13, 33, 64] {
        let input = generate::dense_test_matrix(dim, dim as u64);
        let reference = eliminated(input.clone(), Strategy::Serial, 1);
        for strategy in PARALLEL_STRATEGIES {
            for threads in [1, 2, 3, 4, 8] {
                let result = eliminated(input.clone(), strategy, threads);
                assert_eq!(
                    bits(&result),
                    bits(&reference),
                    "{strategy} with {threads} threads diverged at dim={dim}"
                );
            }
        }
    }
}

#[test]
fn test_parity_on_generator_pattern() {
    // The generator's matrices are already triangular; elimination must
    // leave them bit-identical for every strategy.
    for dim in [1, 4, 17, 32] {
        let input = generate::seeded_test_matrix(dim, 1234);
        for strategy in Strategy::ACTIVE {
            let result = eliminated(input.clone(), strategy, 4);
            assert_eq!(
                bits(&result),
                bits(&input),
                "{strategy} changed a triangular matrix at dim={dim}"
            );
        }
    }
}

#[test]
fn test_elimination_is_idempotent() {
    let once = eliminated(generate::dense_test_matrix(24, 5), Strategy::Serial, 1);
    for strategy in PARALLEL_STRATEGIES {
        let twice = eliminated(once.clone(), strategy, 4);
        assert_eq!(bits(&twice), bits(&once), "{strategy} is not idempotent");
    }
}

#[test]
fn test_zero_pivot_propagates_identically_2x2() {
    // Pivot 0 at step 0: row 0 becomes [NaN, inf], and the damage flows
    // into row 1. The failure pattern must match across variants, bit for
    // bit, including NaN payloads.
    let input = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let reference = eliminated(input.clone(), Strategy::Serial, 1);
    assert!(reference[(0, 0)].is_nan());
    assert!(reference[(0, 1)].is_infinite());
    for strategy in PARALLEL_STRATEGIES {
        for threads in [1, 2, 4] {
            let result = eliminated(input.clone(), strategy, threads);
            assert_eq!(
                bits(&result),
                bits(&reference),
                "{strategy} with {threads} threads diverged on a zero pivot"
            );
        }
    }
}

#[test]
fn test_zero_pivot_propagates_identically_3x3() {
    // The pivot goes to zero at step 1, after one round of real updates.
    let input = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 5.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();
    let reference = eliminated(input.clone(), Strategy::Serial, 1);
    assert!(reference[(1, 1)].is_nan());
    for strategy in PARALLEL_STRATEGIES {
        let result = eliminated(input.clone(), strategy, 4);
        assert_eq!(
            bits(&result),
            bits(&reference),
            "{strategy} diverged on a mid-run zero pivot"
        );
    }
}

#[test]
fn test_triangular_3x3_bits_preserved() {
    let input = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 1.0, 4.0],
        vec![0.0, 0.0, 1.0],
    ])
    .unwrap();
    for strategy in Strategy::ACTIVE {
        let result = eliminated(input.clone(), strategy, 4);
        assert_eq!(bits(&result), bits(&input));
    }
}

#[test]
fn test_dim_one_boundary() {
    for strategy in PARALLEL_STRATEGIES {
        let result = eliminated(generate::test_matrix(1), strategy, 4);
        assert_eq!(result[(0, 0)], 1.0);
    }
}
