//! HACC short-range force kernel microbenchmark
//!
//! The kernel sums the short-range gravitational force on one particle from
//! a list of neighbours. The long-range part already handled by the grid
//! solver is subtracted with a fifth-order polynomial in `r²`.

use crate::parallel::parallel_map_indexed;
use serde::Serialize;
use std::time::Instant;

/// Polynomial coefficients of the grid-force correction
const MA: [f32; 6] = [
    0.269327,
    -0.0750978,
    0.0114808,
    -0.00109313,
    0.0000605491,
    -0.00000147177,
];

/// Force cutoff and softening parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    /// Squared short-range cutoff radius
    pub fsrrmax2: f32,
    /// Squared softening length
    pub mp_rsm2: f32,
}

/// Force on particle `(xi, yi, zi)` from every particle in `xx/yy/zz/mass`.
///
/// Neighbours beyond the cutoff contribute nothing, and neither does a
/// neighbour at zero distance.
///
/// # Panics
///
/// Panics if the neighbour slices differ in length.
#[allow(clippy::too_many_arguments)]
pub fn step10(
    xi: f32,
    yi: f32,
    zi: f32,
    params: ForceParams,
    xx: &[f32],
    yy: &[f32],
    zz: &[f32],
    mass: &[f32],
) -> [f32; 3] {
    assert!(
        xx.len() == yy.len() && xx.len() == zz.len() && xx.len() == mass.len(),
        "neighbour arrays must have equal length"
    );

    let mut acc = [0.0f32; 3];
    for j in 0..xx.len() {
        let dxc = xx[j] - xi;
        let dyc = yy[j] - yi;
        let dzc = zz[j] - zi;

        let r2 = dxc * dxc + dyc * dyc + dzc * dzc;
        let m = if r2 < params.fsrrmax2 { mass[j] } else { 0.0 };

        let poly = MA[0] + r2 * (MA[1] + r2 * (MA[2] + r2 * (MA[3] + r2 * (MA[4] + r2 * MA[5]))));
        // The power term is evaluated in double precision, then narrowed.
        let f = (f64::from(r2 + params.mp_rsm2).powf(-1.5) - f64::from(poly)) as f32;
        let f = if r2 > 0.0 { m * f } else { 0.0 };

        acc[0] += f * dxc;
        acc[1] += f * dyc;
        acc[2] += f * dzc;
    }
    acc
}

/// Parameters of the particle-count sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First particle count
    pub n_start: usize,
    /// Sweep stops before this particle count
    pub n_end: usize,
    /// Increment between particle counts
    pub n_step: usize,
    /// Particles whose force is evaluated at each step
    pub count: usize,
    /// Velocity update coefficient
    pub fcoeff: f32,
    /// Force parameters
    pub force: ForceParams,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            n_start: 400,
            n_end: 15000,
            n_step: 20,
            count: 327,
            fcoeff: 0.23,
            force: ForceParams {
                fsrrmax2: 0.5,
                mp_rsm2: 0.03,
            },
        }
    }
}

/// Outcome of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepResult {
    /// Time spent inside the force loop, summed over all steps
    pub kernel_secs: f64,
    /// Wall-clock time of the whole sweep
    pub total_secs: f64,
    /// Sum over steps of `Σ (vx + vy + vz)`
    pub validation: f64,
    /// Number of particle counts evaluated
    pub steps: usize,
}

/// Particles laid out on a line with increasing mass
struct Particles {
    xx: Vec<f32>,
    yy: Vec<f32>,
    zz: Vec<f32>,
    mass: Vec<f32>,
}

impl Particles {
    fn line(n: usize) -> Self {
        let dx = 1.0f32 / n as f32;
        let dy = 2.0f32 / n as f32;
        let dz = 3.0f32 / n as f32;

        let mut p = Particles {
            xx: vec![0.0; n],
            yy: vec![0.0; n],
            zz: vec![0.0; n],
            mass: vec![0.0; n],
        };
        if n == 0 {
            return p;
        }
        p.mass[0] = 2.0;
        for i in 1..n {
            p.xx[i] = p.xx[i - 1] + dx;
            p.yy[i] = p.yy[i - 1] + dy;
            p.zz[i] = p.zz[i - 1] + dz;
            p.mass[i] = i as f32 * 0.01 + p.xx[i];
        }
        p
    }
}

/// Run the force kernel for each particle count of the sweep.
///
/// At each step the forces on the first `count` particles are computed in
/// parallel and folded into their velocities.
pub fn run_sweep(config: &SweepConfig) -> SweepResult {
    let sweep_start = Instant::now();
    let mut kernel_secs = 0.0;
    let mut validation = 0.0;
    let mut steps = 0;

    let step = config.n_step.max(1);
    for n in (config.n_start..config.n_end).step_by(step) {
        let p = Particles::line(n);
        let count = config.count.min(n);
        let mut vx = vec![0.0f32; n];
        let mut vy = vec![0.0f32; n];
        let mut vz = vec![0.0f32; n];

        let t1 = Instant::now();
        let forces = parallel_map_indexed(count, |i| {
            step10(
                p.xx[i],
                p.yy[i],
                p.zz[i],
                config.force,
                &p.xx,
                &p.yy,
                &p.zz,
                &p.mass,
            )
        });
        for (i, [dx, dy, dz]) in forces.into_iter().enumerate() {
            vx[i] += dx * config.fcoeff;
            vy[i] += dy * config.fcoeff;
            vz[i] += dz * config.fcoeff;
        }
        kernel_secs += t1.elapsed().as_secs_f64();

        let step_validation: f64 = (0..n)
            .map(|i| f64::from(vx[i] + vy[i] + vz[i]))
            .sum();
        validation += step_validation;
        steps += 1;

        log::debug!("haccmk n={n}: validation {step_validation:.8}");
    }

    SweepResult {
        kernel_secs,
        total_secs: sweep_start.elapsed().as_secs_f64(),
        validation,
        steps,
    }
}
