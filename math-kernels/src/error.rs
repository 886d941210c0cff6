//! Error types for the benchmark kernels and drivers.

use math_audio_sparse::SparseError;
use thiserror::Error;

/// Errors that can occur while setting up or running a benchmark.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A benchmark parameter is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name as given on the command line
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Matrix operands have incompatible shapes.
    #[error("shape mismatch: {left} is {left_shape:?}, {right} is {right_shape:?}")]
    ShapeMismatch {
        /// Name of the first operand
        left: &'static str,
        /// Shape of the first operand
        left_shape: (usize, usize),
        /// Name of the second operand
        right: &'static str,
        /// Shape of the second operand
        right_shape: (usize, usize),
    },

    /// The Coulomb domain ended up with no charges.
    #[error("there are no charges in the domain")]
    NoCharges,

    /// Buffer construction failed.
    #[error(transparent)]
    Sparse(#[from] SparseError),

    /// The global thread pool could not be configured.
    #[error("failed to configure thread pool: {0}")]
    ThreadPool(String),

    /// Report serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;

impl KernelError {
    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        KernelError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if a benchmark parameter was rejected.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            KernelError::InvalidParameter { .. } | KernelError::NoCharges
        )
    }

    /// Returns `true` if the failure came from running out of memory.
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, KernelError::Sparse(e) if e.is_allocation_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KernelError::invalid("density", "must be in [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid parameter density: must be in [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_sparse_error_is_transparent() {
        let err: KernelError = SparseError::InvalidDimensions { rows: 0, cols: 0 }.into();
        assert_eq!(
            err.to_string(),
            "invalid dimensions: 0 x 0 (both must be >= 1)"
        );
        assert!(!err.is_allocation_error());
    }

    #[test]
    fn test_is_allocation_error() {
        let err: KernelError = SparseError::AllocationFailed {
            buffer: "dense",
            len: 1,
        }
        .into();
        assert!(err.is_allocation_error());
        assert!(!err.is_parameter_error());
        assert!(KernelError::NoCharges.is_parameter_error());
    }
}
