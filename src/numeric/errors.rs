// ============================================================================
// Numeric Errors
// Error types for fixed-point scaling operations
// ============================================================================

use std::fmt;

/// Errors that can occur while scaling integer amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result or an intermediate product exceeded the i128 range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input factor or precision is not usable (non-finite, out of range)
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the i128 range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: factor or precision out of range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
