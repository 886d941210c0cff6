//! Transpose sparse matrix-vector product `y = Aᵀ x` over CRS storage.
//!
//! Rows are walked in order and each stored entry is scattered into the
//! output slot named by its column, so no column-major copy of the matrix
//! is needed. Summation order is row-major, then ascending column.

use crate::crs::CrsMatrix;
use crate::error::{Result, SparseError};
use crate::vector::Vector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rows below which the parallel kernel runs sequentially.
pub const PARALLEL_ROW_THRESHOLD: usize = 256;

/// Computes `y = Aᵀ x`.
///
/// `x` has one entry per row of `A`, `y` one entry per column. `y` is
/// overwritten.
///
/// # Panics
///
/// Panics if `x.len() != A.num_rows()` or `y.len() != A.num_cols()`.
pub fn atmux(matrix: &CrsMatrix, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), matrix.num_rows(), "Input vector size mismatch");
    assert_eq!(y.len(), matrix.num_cols(), "Output vector size mismatch");

    y.fill(0.0);

    let values = matrix.values();
    let col_indices = matrix.col_indices();
    for (i, &xi) in x.iter().enumerate() {
        for idx in matrix.row_range(i) {
            y[col_indices[idx]] += xi * values[idx];
        }
    }
}

/// Same as [`atmux`] but returns an error on mismatched lengths.
pub fn try_atmux(matrix: &CrsMatrix, x: &[f64], y: &mut [f64]) -> Result<()> {
    if x.len() != matrix.num_rows() {
        return Err(SparseError::DimensionMismatch {
            expected: matrix.num_rows(),
            got: x.len(),
        });
    }
    if y.len() != matrix.num_cols() {
        return Err(SparseError::DimensionMismatch {
            expected: matrix.num_cols(),
            got: y.len(),
        });
    }
    atmux(matrix, x, y);
    Ok(())
}

/// Parallel `y = Aᵀ x` using rayon
///
/// Different rows may scatter into the same output slot, so rows are split
/// into blocks that each accumulate into a private buffer; the buffers are
/// then summed. Results match [`atmux`] up to floating-point reassociation.
#[cfg(feature = "parallel")]
pub fn atmux_parallel(matrix: &CrsMatrix, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), matrix.num_rows(), "Input vector size mismatch");
    assert_eq!(y.len(), matrix.num_cols(), "Output vector size mismatch");

    let rows = matrix.num_rows();
    if rows < PARALLEL_ROW_THRESHOLD {
        atmux(matrix, x, y);
        return;
    }

    let cols = matrix.num_cols();
    let min_block = rows.div_ceil(rayon::current_num_threads()).max(1);
    let values = matrix.values();
    let col_indices = matrix.col_indices();

    let sum = (0..rows)
        .into_par_iter()
        .with_min_len(min_block)
        .fold(
            || vec![0.0; cols],
            |mut acc, i| {
                let xi = x[i];
                for idx in matrix.row_range(i) {
                    acc[col_indices[idx]] += xi * values[idx];
                }
                acc
            },
        )
        .reduce(
            || vec![0.0; cols],
            |mut a, b| {
                a.iter_mut().zip(&b).for_each(|(a, b)| *a += b);
                a
            },
        );

    y.copy_from_slice(&sum);
}

/// Sequential fallback when the `parallel` feature is disabled
#[cfg(not(feature = "parallel"))]
pub fn atmux_parallel(matrix: &CrsMatrix, x: &[f64], y: &mut [f64]) {
    atmux(matrix, x, y);
}

impl CrsMatrix {
    /// Transpose matrix-vector product into a new vector: `Aᵀ x`
    pub fn matvec_transpose(&self, x: &Vector) -> Result<Vector> {
        let mut y = Vector::new(self.num_cols())?;
        try_atmux(self, x.as_slice(), y.as_slice_mut())?;
        Ok(y)
    }
}
