//! Error types for elimr

use thiserror::Error;

/// Result type alias using elimr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in elimr operations
///
/// Numerical failure is deliberately absent: elimination performs no
/// pivoting, and a zero pivot propagates NaN/Inf through the matrix
/// instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch when constructing a matrix
    #[error("Shape mismatch: expected {expected} values for a {dim}x{dim} matrix, got {got}")]
    ShapeMismatch {
        /// Expected element count
        expected: usize,
        /// Matrix dimension
        dim: usize,
        /// Actual element count
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Worker-pool construction or other backend failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// I/O error while writing a benchmark report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
