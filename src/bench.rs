//! Benchmark harness
//!
//! For each configured matrix size, regenerates the test matrix before
//! each strategy's trial, times a fixed number of consecutive elimination
//! runs with a monotonic clock, and writes the average per-run time in
//! microseconds to the supplied writer. No warm-up discard and no
//! variance reporting; the loop is deliberately plain. For statistically
//! careful numbers use the criterion benchmarks instead.

use std::io::Write;
use std::time::Instant;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::generate;
use crate::kernel::{self, Strategy};
use crate::matrix::Matrix;
use crate::parallelism::ParallelismConfig;

/// Matrix sizes exercised by the default benchmark run.
pub const BENCH_SIZES: [usize; 10] = [8, 32, 128, 256, 512, 1024, 2048, 3000, 4096, 5200];

/// Consecutive elimination runs averaged per (size, strategy) trial.
pub const RUNS_PER_TRIAL: usize = 3;

/// Benchmark configuration.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Matrix dimensions to measure, in order.
    pub sizes: Vec<usize>,
    /// Consecutive runs averaged per trial.
    pub runs: usize,
    /// Worker configuration shared by every parallel strategy.
    pub parallelism: ParallelismConfig,
    /// Strategies to measure, in report order.
    pub strategies: Vec<Strategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: BENCH_SIZES.to_vec(),
            runs: RUNS_PER_TRIAL,
            parallelism: ParallelismConfig::default(),
            strategies: Strategy::ACTIVE.to_vec(),
        }
    }
}

/// Run the benchmark and write the timing report.
///
/// For every size and strategy the report carries a banner line (the
/// strategy label) followed by `N: <size> time: <microseconds>us`,
/// prefixed with `NUM_THREADS: <count> ` for parallel strategies. Sizes
/// are separated by a blank line.
pub fn run(config: &BenchConfig, out: &mut impl Write) -> Result<()> {
    if config.runs == 0 {
        return Err(Error::invalid_argument("runs", "must be at least 1"));
    }
    for &dim in &config.sizes {
        info!("benchmarking dim={dim}");
        let mut matrix = Matrix::zeros(dim);
        for &strategy in &config.strategies {
            let avg_us = time_trial(&mut matrix, strategy, config)?;
            let runs = config.runs;
            debug!("{strategy}: dim={dim} avg={avg_us}us over {runs} runs");
            writeln!(out, "{}", strategy.label())?;
            if strategy.is_parallel() {
                let threads = config.parallelism.num_threads();
                writeln!(out, "NUM_THREADS: {threads} N: {dim} time: {avg_us}us")?;
            } else {
                writeln!(out, "N: {dim} time: {avg_us}us")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Refill the matrix, run the strategy `config.runs` times back to back,
/// and return the average elapsed time per run in microseconds.
///
/// The matrix is regenerated once per trial, not once per run: the first
/// run triangularizes it and the remaining runs re-eliminate the already
/// triangular result, which is a numerical no-op with the same loop
/// structure.
fn time_trial(matrix: &mut Matrix, strategy: Strategy, config: &BenchConfig) -> Result<u128> {
    generate::fill_test_pattern(matrix);
    let start = Instant::now();
    for _ in 0..config.runs {
        kernel::eliminate(matrix, strategy, &config.parallelism)?;
    }
    Ok(start.elapsed().as_micros() / config.runs as u128)
}
