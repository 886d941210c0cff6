//! Numeric benchmark kernels and their drivers
//!
//! Each benchmark is a small, self-contained program: read a size, build
//! random input, time a compute loop, print a checksum and the elapsed time.
//! This crate holds the kernels so they can be tested and benchmarked apart
//! from the command-line drivers in `bin/`.
//!
//! # Kernels
//!
//! - **atmux**: CRS transpose product, provided by `math-audio-sparse`
//! - **matmul**: dense `C = A · B`
//! - **coulomb**: potential of point charges on a 2D grid
//! - **haccmk**: HACC short-range N-body force kernel
//! - **pi**: midpoint-rule integration of π
//!
//! With the default `parallel` feature the kernels run on rayon; without it
//! they fall back to sequential loops, which differ only in floating-point
//! summation order.

pub mod coulomb;
pub mod error;
pub mod haccmk;
pub mod matmul;
pub mod options;
pub mod parallel;
pub mod pi;
pub mod report;

pub use coulomb::{Charge, Plane, charge_count, coulomb};
pub use error::{KernelError, Result};
pub use haccmk::{ForceParams, SweepConfig, SweepResult, run_sweep, step10};
pub use matmul::{matmul, matmul_into};
pub use options::CommonArgs;
pub use pi::integrate_pi;
pub use report::{BenchReport, time_iterations};
