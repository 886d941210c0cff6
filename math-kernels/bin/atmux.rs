//! Sparse transpose matrix-vector benchmark
//!
//! Builds a random `n x n` matrix at the requested sparsity, converts it to
//! CRS form and times repeated `y = Aᵀ x` products.
//!
//! Usage:
//!     cargo run --release --bin atmux -- 2000

use anyhow::Context;
use clap::Parser;
use math_audio_kernels::{BenchReport, CommonArgs, time_iterations};
use math_audio_sparse::{CrsMatrix, DenseMatrix, Vector, atmux_parallel};

#[derive(Parser, Debug)]
#[command(
    name = "atmux",
    about = "Time the CRS sparse transpose matrix-vector product y = A^T x"
)]
struct Cli {
    /// Matrix size n (the matrix is n x n)
    n: usize,

    /// Number of kernel repetitions
    #[arg(long, default_value_t = 10)]
    iters: usize,

    /// Fraction of zero entries in the random matrix, in [0, 1]
    #[arg(long, default_value_t = 0.66)]
    sparsity: f64,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&cli.sparsity),
        "sparsity must be in [0, 1], got {}",
        cli.sparsity
    );
    cli.common.init()?;

    let n = cli.n;
    cli.common.say("- Input parameters");
    cli.common.say(&format!("size\t= {n}"));

    let mut rng = cli.common.rng();
    let oom = || format!("not enough memory to run the test using n = {n}");

    let mut x = Vector::new(n).with_context(oom)?;
    x.fill_random(&mut rng);
    let mut y = Vector::new(n).with_context(oom)?;
    let mut dense = DenseMatrix::new(n, n).with_context(oom)?;
    dense.fill_random_sparse(&mut rng, cli.sparsity);
    let crs = CrsMatrix::from_dense(&dense).with_context(oom)?;
    drop(dense);
    log::info!("CRS matrix holds {} non-zeros", crs.nnz());

    cli.common.say("- Executing test...");
    let elapsed = time_iterations(cli.iters, || {
        atmux_parallel(&crs, x.as_slice(), y.as_slice_mut());
    });

    BenchReport::new("atmux", elapsed)
        .int("size", n as u64)
        .plain("sparsity", cli.sparsity)
        .float("chksum", y.checksum(), 0)
        .int("iters", cli.iters as u64)
        .emit(cli.common.json)?;

    Ok(())
}
