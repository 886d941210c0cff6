//! Command-line options shared by every benchmark driver

use crate::error::Result;
use crate::parallel;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Options flattened into each driver's CLI
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Random seed for input data (a fresh seed is drawn if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of worker threads (0 = RAYON_NUM_THREADS or one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl CommonArgs {
    /// Configure the thread pool; call once before running kernels.
    pub fn init(&self) -> Result<()> {
        parallel::configure_threads(self.threads)?;
        log::info!(
            "running with {} thread(s), seed {:?}",
            parallel::num_threads(),
            self.seed
        );
        Ok(())
    }

    /// Random generator for input data
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        }
    }

    /// Print a progress line unless JSON output was requested.
    pub fn say(&self, line: &str) {
        if !self.json {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let args = CommonArgs {
            seed: Some(9),
            ..CommonArgs::default()
        };
        let a: u64 = args.rng().random();
        let b: u64 = args.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_threads_is_noop() {
        CommonArgs::default().init().unwrap();
    }
}
