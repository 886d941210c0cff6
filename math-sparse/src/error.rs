//! Error types for sparse and dense matrix construction.
//!
//! Construction either succeeds with a fully valid structure or fails with
//! one of the variants below. Argument errors and allocation failures are
//! kept apart so a caller can tell a bad request from an exhausted heap.

use thiserror::Error;

/// Errors that can occur while building matrices and vectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// A dimension is zero.
    #[error("invalid dimensions: {rows} x {cols} (both must be >= 1)")]
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// More non-zeros were requested than the matrix can hold.
    #[error("non-zero count {nnz} exceeds capacity of a {rows} x {cols} matrix")]
    CapacityExceeded {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
        /// Requested number of stored entries
        nnz: usize,
    },

    /// A backing buffer could not be reserved.
    #[error("failed to allocate {buffer} buffer of {len} elements")]
    AllocationFailed {
        /// Name of the buffer being allocated
        buffer: &'static str,
        /// Number of elements requested
        len: usize,
    },

    /// Raw CRS parts do not describe a valid matrix.
    #[error("invalid CRS structure: {reason}")]
    InvalidStructure {
        /// What was violated
        reason: String,
    },

    /// A vector operand has the wrong length.
    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Length provided
        got: usize,
    },
}

/// A specialized `Result` type for matrix construction.
pub type Result<T> = std::result::Result<T, SparseError>;

impl SparseError {
    /// Returns `true` if the caller passed bad arguments.
    ///
    /// This includes `InvalidDimensions`, `CapacityExceeded`,
    /// `InvalidStructure` and `DimensionMismatch`.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            SparseError::InvalidDimensions { .. }
                | SparseError::CapacityExceeded { .. }
                | SparseError::InvalidStructure { .. }
                | SparseError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if a backing buffer could not be allocated.
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, SparseError::AllocationFailed { .. })
    }
}

/// Allocate a zero-filled buffer, reporting allocation failure instead of aborting.
pub(crate) fn try_zeroed<T: Clone + Default>(buffer: &'static str, len: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| SparseError::AllocationFailed { buffer, len })?;
    v.resize(len, T::default());
    Ok(v)
}
