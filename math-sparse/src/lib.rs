//! Compressed row storage sparse matrices for numeric benchmarks
//!
//! This crate provides the data structures behind the sparse benchmark:
//! a CRS matrix built from a dense source, the small dense matrix and vector
//! containers that feed it, and the transpose product kernel `atmux`.
//!
//! # Features
//!
//! - **CRS storage**: exactly-sized buffers, ascending columns per row,
//!   early-exit point lookup
//! - **Transpose product**: `y = Aᵀ x`, sequential and rayon block-reduce
//! - **Dense helpers**: random, sparse-random, sequential and identity fills
//!
//! # Example
//!
//! ```
//! use math_audio_sparse::{CrsMatrix, atmux};
//! use ndarray::array;
//!
//! let dense = array![[1.0, 0.0, 2.0], [0.0, 3.0, 0.0]];
//! let crs = CrsMatrix::from_dense(&dense).unwrap();
//! assert_eq!(crs.row_ptrs(), &[0, 2, 3]);
//!
//! let mut y = [0.0; 3];
//! atmux(&crs, &[1.0, 1.0], &mut y);
//! assert_eq!(y, [1.0, 3.0, 2.0]);
//! ```

pub mod atmux;
pub mod crs;
pub mod dense;
pub mod error;
pub mod vector;

pub use atmux::{atmux, atmux_parallel, try_atmux};
pub use crs::{CrsBuilder, CrsMatrix, CrsRaw, ZERO_EPSILON};
pub use dense::{DenseMatrix, DenseSource};
pub use error::{Result, SparseError};
pub use vector::Vector;
