//! Error types for cost function evaluation.
//!
//! Argument and numerical failures are reported through [`CostError`].
//! A cost function that implements none of its evaluation paths is a
//! programming error and panics instead (see [`crate::problems::guard`]).

use thiserror::Error;

/// Recoverable failures surfaced to the caller of a cost function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// A point or gradient buffer does not have the problem dimension.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Finite-difference step must be finite and non-zero.
    #[error("invalid finite-difference step size: {0}")]
    InvalidStepSize(f64),

    /// The objective is undefined at the requested point.
    #[error("numerical domain error: {0}")]
    Domain(String),

    /// A gradient component came out as NaN or infinity.
    #[error("non-finite {what} gradient component at index {index}")]
    NonFinite { what: &'static str, index: usize },
}

/// Result type for cost function operations.
pub type Result<T> = std::result::Result<T, CostError>;

impl CostError {
    /// Create a numerical domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}

/// Check that a buffer has the expected length.
///
/// Implementers call this at the top of `value`/`gradient_into`/`compute`.
pub fn ensure_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CostError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}
