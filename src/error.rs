//! Error types for the vecrank library.
//!
//! All fallible operations return [`Result`], with [`VecrankError`] covering
//! the two ways a ranking call can be structurally invalid: bad arguments and
//! mismatched vector dimensions. There is nothing transient to retry against,
//! so neither kind is recoverable by the library itself.
//!
//! # Examples
//!
//! ```
//! use vecrank::error::{Result, VecrankError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VecrankError::invalid_argument("k must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for vecrank operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VecrankError {
    /// A structurally invalid argument (k < 1, empty query vector, unknown
    /// metric name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A candidate vector whose dimensionality differs from the query's.
    #[error("Dimension mismatch for candidate '{id}': expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Identifier of the offending candidate.
        id: String,
        /// Dimensionality of the query vector.
        expected: usize,
        /// Dimensionality of the candidate vector.
        actual: usize,
    },
}

/// Result type alias for operations that may fail with [`VecrankError`].
pub type Result<T> = std::result::Result<T, VecrankError>;

impl VecrankError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VecrankError::InvalidArgument(msg.into())
    }

    /// Create a new dimension mismatch error for the named candidate.
    pub fn dimension_mismatch<S: Into<String>>(id: S, expected: usize, actual: usize) -> Self {
        VecrankError::DimensionMismatch {
            id: id.into(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VecrankError::invalid_argument("k must be at least 1");
        assert_eq!(error.to_string(), "Invalid argument: k must be at least 1");

        let error = VecrankError::dimension_mismatch("doc-7", 3, 2);
        assert_eq!(
            error.to_string(),
            "Dimension mismatch for candidate 'doc-7': expected 3, got 2"
        );
    }

    #[test]
    fn test_errors_compare_equal() {
        assert_eq!(
            VecrankError::dimension_mismatch("a", 2, 3),
            VecrankError::DimensionMismatch {
                id: "a".to_string(),
                expected: 2,
                actual: 3,
            }
        );
    }
}
