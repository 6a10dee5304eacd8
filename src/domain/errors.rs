// ============================================================================
// Pricing Errors
// Error types for price arithmetic and currency conversion
// ============================================================================

use std::fmt;

use super::currency::Currency;
use crate::numeric::NumericError;

/// Errors raised by price arithmetic and conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceError {
    /// Operands of an arithmetic operation carry different currencies
    CurrencyMismatch {
        expected: Currency,
        found: Currency,
    },
    /// An exchange rate is absent, non-finite, or not strictly positive
    InvalidRate {
        currency: Currency,
        rate: Option<f64>,
    },
    /// An aggregate operation received no operands
    EmptyPriceList,
    /// Magnitude arithmetic failed at the numeric layer
    Numeric(NumericError),
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::CurrencyMismatch { expected, found } => write!(
                f,
                "cannot combine prices of different currencies: expected {}, found {}",
                expected, found
            ),
            PriceError::InvalidRate {
                currency,
                rate: Some(rate),
            } => write!(f, "invalid exchange rate for {}: {}", currency, rate),
            PriceError::InvalidRate {
                currency,
                rate: None,
            } => write!(f, "no exchange rate available for {}", currency),
            PriceError::EmptyPriceList => write!(f, "cannot aggregate an empty list of prices"),
            PriceError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PriceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PriceError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for PriceError {
    fn from(err: NumericError) -> Self {
        PriceError::Numeric(err)
    }
}

/// Result type alias for pricing operations
pub type PriceResult<T> = Result<T, PriceError>;
