//! Benchmark driver binary
//!
//! Takes no arguments, runs the default benchmark campaign, and writes
//! the timing report to stdout. Diagnostics go through the `log` facade;
//! set `RUST_LOG=elimr=debug` to see per-trial averages on stderr.

use std::io;

use elimr::bench::{self, BenchConfig};
use elimr::error::Result;

fn main() -> Result<()> {
    env_logger::init();
    let config = BenchConfig::default();
    let stdout = io::stdout();
    bench::run(&config, &mut stdout.lock())
}
