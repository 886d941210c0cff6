//! π integration benchmark
//!
//! Usage:
//!     cargo run --release --bin pi -- 1000000000

use clap::Parser;
use math_audio_kernels::{BenchReport, CommonArgs, integrate_pi};
use std::f64::consts::PI;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pi", about = "Approximate pi by midpoint integration of sqrt(1 - x^2)")]
struct Cli {
    /// Number of integration steps; controls the precision of the approximation
    steps: u64,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.common.init()?;

    cli.common.say("- Input parameters");
    cli.common.say(&format!("steps\t= {}", cli.steps));

    cli.common.say("- Executing test...");
    let start = Instant::now();
    let result = integrate_pi(cli.steps)?;
    let elapsed = start.elapsed().as_secs_f64();

    BenchReport::new("pi", elapsed)
        .float("result", result, 8)
        .sci("error", (result - PI).abs(), 1)
        .emit(cli.common.json)?;

    Ok(())
}
