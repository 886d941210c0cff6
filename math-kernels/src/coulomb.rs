//! Electric potential of point charges sampled on a 2D grid
//!
//! Each grid cell `(i, j)` sits at `(x0 + j·scale_x, y0 + i·scale_y, z0)` and
//! receives `Σ q / (4π ε0 r)` over all charges, with charges given in nC.

use crate::parallel::parallel_rows_mut;
use math_audio_sparse::DenseMatrix;
use std::f64::consts::PI;

/// Vacuum permittivity ε0 in F/m
pub const VACUUM_PERMITTIVITY: f64 = 8.854187817e-12;

/// Nanocoulomb to coulomb
const NANO: f64 = 1e-9;

/// A point charge; `q` is in nanocoulombs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
    /// Charge in nC
    pub q: f64,
}

impl Charge {
    /// Read charges from packed `x, y, z, q` quadruples. A trailing partial quadruple is ignored.
    pub fn from_packed(packed: &[f64]) -> Vec<Charge> {
        packed
            .chunks_exact(4)
            .map(|c| Charge {
                x: c[0],
                y: c[1],
                z: c[2],
                q: c[3],
            })
            .collect()
    }
}

/// Rectangle `[x0, x1] x [y0, y1]` at height `z0` covered by the output grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Left edge
    pub x0: f64,
    /// Bottom edge
    pub y0: f64,
    /// Height of the plane
    pub z0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
}

impl Plane {
    /// The `[0, n] x [0, n]` plane at `z = 0` used by the benchmark driver.
    pub fn square(n: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            x1: n,
            y1: n,
        }
    }
}

/// Fill `out` with the potential generated by `charges` over `plane`.
///
/// A charge lying exactly on a grid point makes that cell infinite.
pub fn coulomb(charges: &[Charge], plane: &Plane, out: &mut DenseMatrix) {
    let rows = out.rows();
    let cols = out.cols();
    let scale_x = (plane.x1 - plane.x0) / cols as f64;
    let scale_y = (plane.y1 - plane.y0) / rows as f64;
    let k = 4.0 * PI * VACUUM_PERMITTIVITY;

    parallel_rows_mut(out.as_slice_mut(), cols, |i, row| {
        let py = scale_y * i as f64 + plane.y0;
        for (j, cell) in row.iter_mut().enumerate() {
            let px = scale_x * j as f64 + plane.x0;
            let mut potential = 0.0;
            for c in charges {
                let dx = c.x - px;
                let dy = c.y - py;
                let dz = c.z - plane.z0;
                let dist = (dx * dx + dy * dy + dz * dz).sqrt();
                potential += NANO * c.q / dist;
            }
            *cell = potential / k;
        }
    });
}

/// Number of charges for an `n x n` plane at the given density, rounded to nearest.
pub fn charge_count(n: usize, density: f64) -> usize {
    let n = n as f64;
    (n * n * density + 0.5) as usize
}
