//! Dense matrix multiplication benchmark
//!
//! Usage:
//!     cargo run --release --bin matmul -- 1024

use anyhow::Context;
use clap::Parser;
use math_audio_kernels::{BenchReport, CommonArgs, matmul_into};
use math_audio_sparse::DenseMatrix;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "matmul", about = "Time the dense product C = A * B of two n x n matrices")]
struct Cli {
    /// Matrix size n
    n: usize,

    /// Number of kernel repetitions
    #[arg(long, default_value_t = 1)]
    iters: usize,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.common.init()?;

    let n = cli.n;
    cli.common.say("- Input parameters");
    cli.common.say(&format!("n\t= {n}"));

    let oom = || format!("not enough memory to run the test using n = {n}");
    let mut a = DenseMatrix::new(n, n).with_context(oom)?;
    let mut b = DenseMatrix::new(n, n).with_context(oom)?;
    let mut c = DenseMatrix::new(n, n).with_context(oom)?;

    let mut rng = cli.common.rng();
    a.fill_random(&mut rng);
    b.fill_random(&mut rng);

    cli.common.say("- Executing test...");
    let start = Instant::now();
    for _ in 0..cli.iters {
        matmul_into(&a, &b, &mut c)?;
    }
    let elapsed = start.elapsed().as_secs_f64();

    let mut report = BenchReport::new("matmul", elapsed)
        .int("size", n as u64)
        .float("chksum", c.checksum(), 0);
    if cli.iters > 1 {
        report = report.int("iters", cli.iters as u64);
    }
    report.emit(cli.common.json)?;

    Ok(())
}
