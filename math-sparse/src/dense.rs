//! Dense row-major matrix used as benchmark input and as the source for CRS conversion.

use crate::error::{Result, SparseError, try_zeroed};
use ndarray::Array2;
use rand::Rng;
use std::fmt;

/// Read access to a dense `rows x cols` grid.
///
/// This is everything the CRS conversion needs from its input.
pub trait DenseSource {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Element at (row, col)
    fn value(&self, row: usize, col: usize) -> f64;
}

impl DenseSource for Array2<f64> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn cols(&self) -> usize {
        self.ncols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[[row, col]]
    }
}

/// Dense matrix stored contiguously in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Array2<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(SparseError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(SparseError::AllocationFailed {
                buffer: "dense",
                len: usize::MAX,
            })?;
        let buf: Vec<f64> = try_zeroed("dense", len)?;
        let data = Array2::from_shape_vec((rows, cols), buf)
            .map_err(|_| SparseError::InvalidDimensions { rows, cols })?;
        Ok(Self { data })
    }

    /// Wrap an existing array.
    ///
    /// Returns `InvalidDimensions` for an empty array.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows < 1 || cols < 1 {
            return Err(SparseError::InvalidDimensions { rows, cols });
        }
        // Row-major contiguous storage is assumed by `as_slice`.
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Fill with random integers in `[0, 10)`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.data
            .iter_mut()
            .for_each(|v| *v = rng.random_range(0..10_i32) as f64);
        self
    }

    /// Fill with random integers in `[1, 99]`, each kept with probability `1 - sparsity`.
    pub fn fill_random_sparse<R: Rng + ?Sized>(&mut self, rng: &mut R, sparsity: f64) -> &mut Self {
        let prob = 1.0 - sparsity;
        for v in self.data.iter_mut() {
            let value = rng.random_range(1..=99_i32) as f64;
            let keep = rng.random::<f64>() < prob;
            *v = if keep { value } else { 0.0 };
        }
        self
    }

    /// Fill with 1, 2, 3, ... in row-major order.
    pub fn fill_sequential(&mut self) -> &mut Self {
        self.data
            .iter_mut()
            .enumerate()
            .for_each(|(i, v)| *v = (i + 1) as f64);
        self
    }

    /// Ones on the diagonal, zeros elsewhere.
    pub fn fill_identity(&mut self) -> &mut Self {
        self.data
            .indexed_iter_mut()
            .for_each(|((r, c), v)| *v = if r == c { 1.0 } else { 0.0 });
        self
    }

    /// Set every element to zero.
    pub fn fill_zero(&mut self) -> &mut Self {
        self.data.fill(0.0);
        self
    }

    /// Sum of all elements.
    pub fn checksum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows(),
            self.cols()
        );
        self.data[[row, col]]
    }

    /// Set the element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows(),
            self.cols()
        );
        self.data[[row, col]] = value;
    }

    /// Underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Elements as one row-major slice.
    pub fn as_slice(&self) -> &[f64] {
        self.data
            .as_slice()
            .expect("DenseMatrix is always in standard layout")
    }

    /// Elements as one mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        self.data
            .as_slice_mut()
            .expect("DenseMatrix is always in standard layout")
    }
}

impl DenseSource for DenseMatrix {
    fn rows(&self) -> usize {
        self.data.nrows()
    }

    fn cols(&self) -> usize {
        self.data.ncols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (r, row) in self.data.outer_iter().enumerate() {
            write!(f, "{}[ ", if r == 0 { '[' } else { ' ' })?;
            for v in row.iter() {
                write!(f, "{v:.3e} ")?;
            }
            writeln!(f, "]{}", if r + 1 == rows { ']' } else { ' ' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            DenseMatrix::new(0, 3),
            Err(SparseError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(DenseMatrix::new(3, 0).is_err());
    }

    #[test]
    fn test_new_is_zeroed() {
        let m = DenseMatrix::new(2, 3).unwrap();
        assert_eq!(m.size(), 6);
        assert_eq!(m.checksum(), 0.0);
    }

    #[test]
    fn test_sequential_and_checksum() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        m.fill_sequential();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 4.0);
        assert_eq!(m.checksum(), 10.0);
    }

    #[test]
    fn test_identity() {
        let mut m = DenseMatrix::new(3, 3).unwrap();
        m.fill_sequential().fill_identity();
        assert_eq!(m.checksum(), 3.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_random_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = DenseMatrix::new(8, 8).unwrap();
        m.fill_random(&mut rng);
        assert!(m.as_slice().iter().all(|&v| (0.0..10.0).contains(&v) && v.fract() == 0.0));
    }

    #[test]
    fn test_random_sparse_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut m = DenseMatrix::new(10, 10).unwrap();

        m.fill_random_sparse(&mut rng, 1.0);
        assert_eq!(m.checksum(), 0.0);

        m.fill_random_sparse(&mut rng, 0.0);
        assert!(m.as_slice().iter().all(|&v| (1.0..=99.0).contains(&v)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let m = DenseMatrix::new(2, 2).unwrap();
        m.get(2, 0);
    }

    #[test]
    fn test_display() {
        let mut m = DenseMatrix::new(2, 1).unwrap();
        m.fill_sequential();
        assert_eq!(m.to_string(), "[[ 1.000e0 ] \n [ 2.000e0 ]]\n");
    }

    #[test]
    fn test_from_array_transposed_view() {
        let a = ndarray::array![[1.0, 2.0], [3.0, 4.0]].reversed_axes();
        let m = DenseMatrix::from_array(a).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }
}
