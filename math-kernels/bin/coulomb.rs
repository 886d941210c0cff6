//! Coulomb potential benchmark
//!
//! Computes the electric potential created by a set of charges in an
//! `n x n` 2D plane.
//!
//! Usage:
//!     cargo run --release --bin coulomb -- 200 3 0.1

use anyhow::Context;
use clap::Parser;
use math_audio_kernels::{
    BenchReport, Charge, CommonArgs, KernelError, Plane, charge_count, coulomb, time_iterations,
};
use math_audio_sparse::{DenseMatrix, Vector};

/// Grids smaller than this also print their input and output.
const SHOW_EXAMPLE_BELOW: usize = 9;

#[derive(Parser, Debug)]
#[command(
    name = "coulomb",
    about = "Compute the electric potential created by a set of charges in an n x n 2D plane"
)]
struct Cli {
    /// Grid size n
    n: usize,

    /// Number of times the test is repeated
    #[arg(default_value_t = 1)]
    iters: usize,

    /// Ratio of charges to grid cells, in [0, 1]
    #[arg(default_value_t = 0.1)]
    density: f64,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn validate(&self) -> Result<(), KernelError> {
        if self.n < 1 || self.n >= i32::MAX as usize {
            return Err(KernelError::invalid("n", format!("must be in [1, {}), got {}", i32::MAX, self.n)));
        }
        if self.iters < 1 {
            return Err(KernelError::invalid("iters", "must be >= 1"));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(KernelError::invalid(
                "density",
                format!("must be in [0, 1], got {}", self.density),
            ));
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.validate()?;
    cli.common.init()?;

    let n = cli.n;
    let num_charges = charge_count(n, cli.density);
    if num_charges == 0 {
        return Err(KernelError::NoCharges.into());
    }

    let oom = || format!("not enough memory to run the test using n = {n}");
    let mut grid = DenseMatrix::new(n, n).with_context(oom)?;
    let mut packed = Vector::new(4 * num_charges).with_context(oom)?;
    packed.fill_random(&mut cli.common.rng());
    let charges = Charge::from_packed(packed.as_slice());
    log::info!("{} charges over a {n}x{n} grid", charges.len());

    let plane = Plane::square(n as f64);

    cli.common.say("- Executing test...");
    let elapsed = time_iterations(cli.iters, || coulomb(&charges, &plane, &mut grid));

    let mut report = BenchReport::new("coulomb", elapsed)
        .int("size", n as u64)
        .float("chksum", grid.checksum(), 0);
    if cli.iters > 1 {
        report = report.int("iters", cli.iters as u64);
    }
    report.emit(cli.common.json)?;

    if n < SHOW_EXAMPLE_BELOW && !cli.common.json {
        println!("\n- Input vector b:");
        for (i, c) in charges.iter().enumerate() {
            println!(
                "{i}> Charge at (x={:.0}, y={:.0}, z={:.0}) is {:.0} nC",
                c.x, c.y, c.z, c.q
            );
        }
        println!("\n- Output matrix A:");
        print!("{grid}");
    }
    if !cli.common.json {
        println!();
    }

    Ok(())
}
