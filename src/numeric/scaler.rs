// ============================================================================
// Approximate Fixed-Point Scaler
// Multiplies large integer amounts by float factors without going through
// a float product
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Significant decimal digits used to fix a float factor when the caller
/// does not ask for a specific precision.
pub const DEFAULT_PRECISION_DIGITS: u32 = 20;

/// Largest usable precision: 10^38 is the biggest power of ten inside i128.
pub const MAX_PRECISION_DIGITS: u32 = 38;

/// Compute 10^n in i128. Callers keep `n` within `MAX_PRECISION_DIGITS`.
pub(crate) const fn pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Scale an integer amount by a float factor.
///
/// The factor is fixed into the rational `numerator / 10^precision_digits`
/// (numerator rounded to the nearest integer), the fraction is reduced by
/// its GCD, and the multiply-then-divide runs entirely in i128. The final
/// division truncates toward zero, so the result sits within one unit of
/// `amount * factor` plus the rounding error of the fixed factor itself.
///
/// A float product would start dropping low-order digits once the amount
/// leaves the f64 exact-integer range (about 2^53); this path keeps every
/// digit of the amount.
///
/// # Errors
/// - `InvalidInput` if the factor is non-finite or `precision_digits` is
///   outside `1..=MAX_PRECISION_DIGITS`
/// - `Overflow` if the fixed factor or an intermediate product leaves i128
pub fn approx_scale(amount: i128, factor: f64, precision_digits: u32) -> NumericResult<i128> {
    if !factor.is_finite() {
        return Err(NumericError::InvalidInput);
    }
    if precision_digits == 0 || precision_digits > MAX_PRECISION_DIGITS {
        return Err(NumericError::InvalidInput);
    }
    if amount == 0 || factor == 0.0 {
        return Ok(0);
    }

    let fixed = (factor * 10f64.powi(precision_digits as i32)).round();
    if fixed >= i128::MAX as f64 || fixed <= i128::MIN as f64 {
        return Err(NumericError::Overflow);
    }

    let numerator = fixed as i128;
    if numerator == 0 {
        // The factor is too small to register at this precision.
        return Ok(0);
    }

    let denominator = pow10(precision_digits);
    let common = gcd(numerator.unsigned_abs(), denominator as u128) as i128;

    mul_div_trunc(amount, numerator / common, denominator / common)
}

/// Compute `value * multiplier / divisor` with truncation toward zero.
///
/// The value is split into `divisor`-sized quotient and remainder parts so
/// the intermediate products stay inside i128 whenever the true result does
/// not itself come near the i128 boundary.
///
/// # Errors
/// - `DivisionByZero` if `divisor == 0`
/// - `Overflow` if the result cannot be represented
pub fn mul_div_trunc(value: i128, multiplier: i128, divisor: i128) -> NumericResult<i128> {
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }

    let quotient = value / divisor;
    let remainder = value % divisor;

    let high = quotient
        .checked_mul(multiplier)
        .ok_or(NumericError::Overflow)?;
    let low = remainder
        .checked_mul(multiplier)
        .ok_or(NumericError::Overflow)?
        / divisor;

    high.checked_add(low).ok_or(NumericError::Overflow)
}

#[inline]
const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ============================================================================
// Tests
// ============================================================================
