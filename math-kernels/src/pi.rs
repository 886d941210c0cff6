//! Midpoint-rule approximation of π as `4 ∫₀¹ √(1 − x²) dx`

use crate::error::{KernelError, Result};
use crate::parallel::parallel_sum;

/// Approximate π with `steps` midpoint samples, summed in parallel.
pub fn integrate_pi(steps: u64) -> Result<f64> {
    if steps == 0 {
        return Err(KernelError::invalid("steps", "must be >= 1"));
    }
    let n = steps as f64;
    let sum = parallel_sum(steps, |i| {
        let x = (i as f64 + 0.5) / n;
        (1.0 - x * x).sqrt()
    });
    Ok(4.0 / n * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_pi_converges() {
        let coarse = (integrate_pi(100).unwrap() - PI).abs();
        let fine = (integrate_pi(100_000).unwrap() - PI).abs();
        assert!(fine < coarse);
        assert!(fine < 1e-6, "error {fine}");
    }

    #[test]
    fn test_single_step() {
        // One sample at x = 0.5
        let expected = 4.0 * (0.75f64).sqrt();
        assert_eq!(integrate_pi(1).unwrap(), expected);
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(integrate_pi(0).unwrap_err().is_parameter_error());
    }
}
