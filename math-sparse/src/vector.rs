//! Fixed-length vector of f64 used as kernel operand and result.

use crate::error::{Result, SparseError, try_zeroed};
use ndarray::Array1;
use rand::Rng;
use std::fmt;

/// Fixed-length dense vector
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Create a zero-filled vector of `size` elements (`size >= 1`).
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(SparseError::InvalidDimensions {
                rows: size,
                cols: 1,
            });
        }
        let buf: Vec<f64> = try_zeroed("vector", size)?;
        Ok(Self {
            data: Array1::from_vec(buf),
        })
    }

    /// Build from existing values.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SparseError::InvalidDimensions { rows: 0, cols: 1 });
        }
        Ok(Self {
            data: Array1::from_vec(values),
        })
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Fill with random integers in `[0, size)`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let n = self.size();
        self.data
            .iter_mut()
            .for_each(|v| *v = rng.random_range(0..n) as f64);
        self
    }

    /// Fill with 0, 1, 2, ...
    pub fn fill_sequential(&mut self) -> &mut Self {
        self.data
            .iter_mut()
            .enumerate()
            .for_each(|(i, v)| *v = i as f64);
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

    /// Element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= size`.
    pub fn get(&self, pos: usize) -> f64 {
        assert!(
            pos < self.size(),
            "index {pos} out of bounds for vector of size {}",
            self.size()
        );
        self.data[pos]
    }

    /// Underlying array
    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.data
            .as_slice()
            .expect("Vector is always contiguous")
    }

    /// Elements as a mutable slice
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        self.data
            .as_slice_mut()
            .expect("Vector is always contiguous")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.size() - 1;
        write!(f, "{{ ")?;
        for (i, v) in self.data.iter().enumerate() {
            write!(f, "{v:5.1}{}", if i == last { ' ' } else { ',' })?;
        }
        writeln!(f, "}}")
    }
}
