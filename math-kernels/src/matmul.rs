//! Dense matrix multiplication `C = A · B`

use crate::error::{KernelError, Result};
use crate::parallel::parallel_rows_mut;
use math_audio_sparse::DenseMatrix;

/// Computes `C (m x n) = A (m x p) · B (p x n)`, overwriting `c`.
///
/// Rows of `C` are computed in parallel. Each `C[i][j]` accumulates its
/// products in ascending `k`, starting from zero.
pub fn matmul_into(a: &DenseMatrix, b: &DenseMatrix, c: &mut DenseMatrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(KernelError::ShapeMismatch {
            left: "A",
            left_shape: (a.rows(), a.cols()),
            right: "B",
            right_shape: (b.rows(), b.cols()),
        });
    }
    if c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(KernelError::ShapeMismatch {
            left: "C",
            left_shape: (c.rows(), c.cols()),
            right: "A·B",
            right_shape: (a.rows(), b.cols()),
        });
    }

    let p = a.cols();
    let n = b.cols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();

    parallel_rows_mut(c.as_slice_mut(), n, |i, c_row| {
        c_row.fill(0.0);
        let a_row = &a_data[i * p..(i + 1) * p];
        // i-k-j order: same per-element summation order as i-j-k, unit stride on B.
        for (k, &a_ik) in a_row.iter().enumerate() {
            let b_row = &b_data[k * n..(k + 1) * n];
            for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ik * b_kj;
            }
        }
    });

    Ok(())
}

/// Computes `A · B` into a newly allocated matrix.
pub fn matmul(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    let mut c = DenseMatrix::new(a.rows(), b.cols())?;
    matmul_into(a, b, &mut c)?;
    Ok(c)
}
