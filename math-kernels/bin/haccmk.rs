//! HACC short-range force kernel microbenchmark
//!
//! Sweeps the neighbour count from `--n-start` to `--n-end` and evaluates
//! the force on the first `--count` particles at each step.
//!
//! Usage:
//!     cargo run --release --bin haccmk

use clap::Parser;
use math_audio_kernels::{BenchReport, CommonArgs, ForceParams, KernelError, SweepConfig, run_sweep};

#[derive(Parser, Debug)]
#[command(name = "haccmk", about = "Time the HACC short-range N-body force kernel")]
struct Cli {
    /// Particles whose force is evaluated at each step
    #[arg(long, default_value_t = 327)]
    count: usize,

    /// First neighbour count of the sweep
    #[arg(long, default_value_t = 400)]
    n_start: usize,

    /// Sweep stops before this neighbour count
    #[arg(long, default_value_t = 15000)]
    n_end: usize,

    /// Increment of the neighbour count
    #[arg(long, default_value_t = 20)]
    n_step: usize,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn sweep_config(&self) -> Result<SweepConfig, KernelError> {
        if self.n_step == 0 {
            return Err(KernelError::invalid("n-step", "must be >= 1"));
        }
        if self.count == 0 {
            return Err(KernelError::invalid("count", "must be >= 1"));
        }
        Ok(SweepConfig {
            n_start: self.n_start,
            n_end: self.n_end,
            n_step: self.n_step,
            count: self.count,
            fcoeff: 0.23,
            force: ForceParams {
                fsrrmax2: 0.5,
                mp_rsm2: 0.03,
            },
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.sweep_config()?;
    cli.common.init()?;

    cli.common.say(&format!("count is set {}", config.count));
    let result = run_sweep(&config);

    BenchReport::new("haccmk", result.kernel_secs)
        .float("total (s)", result.total_secs, 6)
        .float("validation", result.validation, 8)
        .int("steps", result.steps as u64)
        .emit(cli.common.json)?;

    Ok(())
}
