use thiserror::Error;

/// A result type for covariance computations
pub type Result<T> = std::result::Result<T, KernelError>;

/// An error when computing distances or covariance matrices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// When point sets (or single points) do not live in the same dimension
    #[error("Dimension mismatch: {left} vs {right} components")]
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },
    /// When a pre-allocated output array does not have the expected shape
    #[error("Shape mismatch: expected {expected:?} output, got {actual:?}")]
    ShapeMismatch {
        /// Shape required by the inputs
        expected: (usize, usize),
        /// Shape of the given output array
        actual: (usize, usize),
    },
    /// When error due to a bad value
    #[error("InvalidValue error: {0}")]
    InvalidValueError(String),
}
