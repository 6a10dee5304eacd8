// ============================================================================
// Price Domain Model
// Smallest-unit integer amounts tagged with their currency
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::Currency;
use super::errors::{PriceError, PriceResult};
use crate::numeric::{approx_scale, mul_div_trunc, pow10, NumericError, DEFAULT_PRECISION_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary amount on the marketplace.
///
/// The magnitude is an i128 in the currency's smallest unit (cents for Usd,
/// wei for the Eth family), so same-currency arithmetic is exact. Negative
/// values only occur as intermediate subtraction results; a final amount is
/// expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Price {
    /// Magnitude in smallest units
    pub value: i128,

    /// Currency the magnitude is denominated in
    pub currency: Currency,
}

impl Price {
    #[inline]
    pub const fn new(value: i128, currency: Currency) -> Self {
        Self { value, currency }
    }

    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Self { value: 0, currency }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.value < 0
    }
}

// ============================================================================
// Same-Currency Arithmetic
// ============================================================================

/// Sum a non-empty sequence of same-currency prices.
///
/// # Errors
/// - `EmptyPriceList` for an empty slice
/// - `CurrencyMismatch` if any element differs from the first
/// - `Numeric(Overflow)` if the i128 sum wraps
pub fn add_prices(prices: &[Price]) -> PriceResult<Price> {
    let first = prices.first().ok_or(PriceError::EmptyPriceList)?;

    let mut total: i128 = 0;
    for price in prices {
        if price.currency != first.currency {
            return Err(PriceError::CurrencyMismatch {
                expected: first.currency,
                found: price.currency,
            });
        }
        total = total
            .checked_add(price.value)
            .ok_or(NumericError::Overflow)?;
    }

    Ok(Price::new(total, first.currency))
}

/// Subtract `b` from `a`. The result may be negative; interpreting that is
/// the caller's responsibility.
///
/// # Errors
/// - `CurrencyMismatch` if the currencies differ
/// - `Numeric(Overflow)` if the i128 difference wraps
pub fn subtract_prices(a: Price, b: Price) -> PriceResult<Price> {
    if a.currency != b.currency {
        return Err(PriceError::CurrencyMismatch {
            expected: a.currency,
            found: b.currency,
        });
    }

    let value = a
        .value
        .checked_sub(b.value)
        .ok_or(NumericError::Overflow)?;

    Ok(Price::new(value, a.currency))
}

/// Multiply a price by a float factor, staying in the price's currency.
///
/// The factor is first fixed to the currency's smallest unit via
/// [`number_as_price`], then applied with truncating integer division, so
/// the magnitude itself never passes through floating point.
pub fn multiply_price_by_number(price: Price, factor: f64) -> PriceResult<Price> {
    let factor_units = number_as_price(factor, price.currency)?.value;
    let scale = pow10(price.currency.decimals());

    let value = mul_div_trunc(price.value, factor_units, scale)?;
    Ok(Price::new(value, price.currency))
}

/// Scale a price by an approximate float factor at the default precision.
///
/// Unlike [`multiply_price_by_number`] the factor is not quantized to the
/// currency's smallest unit; it is fixed with
/// [`DEFAULT_PRECISION_DIGITS`] significant digits, which the premium
/// engine relies on for its decay curve.
pub fn approx_scale_price(price: Price, scale_factor: f64) -> PriceResult<Price> {
    let value = approx_scale(price.value, scale_factor, DEFAULT_PRECISION_DIGITS)?;
    Ok(Price::new(value, price.currency))
}

// ============================================================================
// Float Boundary
// ============================================================================

/// View a price as a plain float, for display-adjacent math only.
///
/// Lossy once the magnitude leaves f64's exact-integer range; storage and
/// arithmetic stay on the integer side.
#[inline]
pub fn price_as_number(price: Price) -> f64 {
    price.value as f64 / 10f64.powi(price.currency.decimals() as i32)
}

/// Fix a float into a smallest-unit price.
///
/// The float is decoded into a [`Decimal`], rounded to the currency's
/// decimals (half away from zero) to strip float representation artifacts,
/// and only then scaled up to integer units. No decimal string is involved
/// at any point, so scientific-notation artifacts cannot occur.
///
/// # Errors
/// - `Numeric(InvalidInput)` for a non-finite value
/// - `Numeric(Overflow)` if the value cannot be carried by `Decimal` or i128
pub fn number_as_price(value: f64, currency: Currency) -> PriceResult<Price> {
    if !value.is_finite() {
        return Err(NumericError::InvalidInput.into());
    }

    let decimals = currency.decimals();
    let decimal = Decimal::from_f64(value).ok_or(NumericError::Overflow)?;
    let fixed = decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    let scale = Decimal::from_i128_with_scale(pow10(decimals), 0);
    let units = fixed.checked_mul(scale).ok_or(NumericError::Overflow)?;
    let value = units.to_i128().ok_or(NumericError::Overflow)?;

    Ok(Price::new(value, currency))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_same_currency() {
        let total = add_prices(&[
            Price::new(150_000, Currency::Usd),
            Price::new(2_500, Currency::Usd),
            Price::new(1, Currency::Usd),
        ])
        .unwrap();
        assert_eq!(total, Price::new(152_501, Currency::Usd));
    }

    #[test]
    fn test_add_currency_mismatch() {
        let result = add_prices(&[
            Price::new(1, Currency::Usd),
            Price::new(1, Currency::Dai),
        ]);
        assert_eq!(
            result,
            Err(PriceError::CurrencyMismatch {
                expected: Currency::Usd,
                found: Currency::Dai,
            })
        );
    }

    #[test]
    fn test_add_empty() {
        assert_eq!(add_prices(&[]), Err(PriceError::EmptyPriceList));
    }

    #[test]
    fn test_add_overflow() {
        let result = add_prices(&[
            Price::new(i128::MAX, Currency::Usd),
            Price::new(1, Currency::Usd),
        ]);
        assert_eq!(result, Err(PriceError::Numeric(NumericError::Overflow)));
    }

    #[test]
    fn test_subtract() {
        let a = Price::new(150_000, Currency::Usd);
        let b = Price::new(50_000, Currency::Usd);
        assert_eq!(subtract_prices(a, b).unwrap(), Price::new(100_000, Currency::Usd));
    }

    #[test]
    fn test_subtract_goes_negative() {
        let a = Price::new(100, Currency::Eth);
        let b = Price::new(250, Currency::Eth);
        let diff = subtract_prices(a, b).unwrap();
        assert_eq!(diff.value, -150);
        assert!(diff.is_negative());
    }

    #[test]
    fn test_subtract_currency_mismatch() {
        let result = subtract_prices(
            Price::new(1, Currency::Eth),
            Price::new(1, Currency::Weth),
        );
        assert_eq!(
            result,
            Err(PriceError::CurrencyMismatch {
                expected: Currency::Eth,
                found: Currency::Weth,
            })
        );
    }

    #[test]
    fn test_multiply_by_number() {
        let price = Price::new(150_000, Currency::Usd);
        let result = multiply_price_by_number(price, 1.5).unwrap();
        assert_eq!(result, Price::new(225_000, Currency::Usd));
    }

    #[test]
    fn test_multiply_truncates_toward_zero() {
        // 0.333 fixes to 0.33 in cents; 3.33 * 0.33 = 1.0989, sub-cent
        // digits are dropped
        let price = Price::new(333, Currency::Usd);
        let result = multiply_price_by_number(price, 0.333).unwrap();
        assert_eq!(result.value, 109);
    }

    #[test]
    fn test_multiply_large_wei_amount() {
        // 10,000 ETH doubled; the naive product would not fit in i128
        let price = Price::new(10_000_000_000_000_000_000_000, Currency::Eth);
        let result = multiply_price_by_number(price, 2.0).unwrap();
        assert_eq!(result.value, 20_000_000_000_000_000_000_000);
    }

    #[test]
    fn test_number_as_price_eth() {
        let price = number_as_price(0.054, Currency::Eth).unwrap();
        assert_eq!(price, Price::new(54_000_000_000_000_000, Currency::Eth));
    }

    #[test]
    fn test_number_as_price_usd() {
        assert_eq!(
            number_as_price(1_500.0, Currency::Usd).unwrap(),
            Price::new(150_000, Currency::Usd)
        );
    }

    #[test]
    fn test_number_as_price_strips_float_artifacts() {
        // 0.1 + 0.2 is 0.30000000000000004 as f64
        let price = number_as_price(0.1 + 0.2, Currency::Usd).unwrap();
        assert_eq!(price.value, 30);
    }

    #[test]
    fn test_number_as_price_rounds_below_smallest_unit() {
        assert_eq!(number_as_price(1e-9, Currency::Usd).unwrap().value, 0);
        assert_eq!(number_as_price(0.005, Currency::Usd).unwrap().value, 1);
    }

    #[test]
    fn test_number_as_price_negative() {
        assert_eq!(number_as_price(-1.25, Currency::Usd).unwrap().value, -125);
    }

    #[test]
    fn test_number_as_price_non_finite() {
        assert_eq!(
            number_as_price(f64::NAN, Currency::Usd),
            Err(PriceError::Numeric(NumericError::InvalidInput))
        );
        assert_eq!(
            number_as_price(f64::NEG_INFINITY, Currency::Usd),
            Err(PriceError::Numeric(NumericError::InvalidInput))
        );
    }

    #[test]
    fn test_price_as_number() {
        assert_eq!(price_as_number(Price::new(150_000, Currency::Usd)), 1_500.0);
        assert_eq!(
            price_as_number(Price::new(54_000_000_000_000_000, Currency::Eth)),
            0.054
        );
        assert_eq!(price_as_number(Price::new(100, Currency::Gas)), 100.0);
    }

    #[test]
    fn test_approx_scale_price_keeps_currency() {
        let start = Price::new(10_000_000_000, Currency::Usd);
        let scaled = approx_scale_price(start, 0.5f64.powi(21)).unwrap();
        assert_eq!(scaled, Price::new(4_768, Currency::Usd));
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_recovers(
            a in -1_000_000_000_000i128..1_000_000_000_000i128,
            b in -1_000_000_000_000i128..1_000_000_000_000i128,
        ) {
            let pa = Price::new(a, Currency::Dai);
            let pb = Price::new(b, Currency::Dai);
            let sum = add_prices(&[pa, pb]).unwrap();
            prop_assert_eq!(subtract_prices(sum, pb).unwrap(), pa);
        }

        #[test]
        fn prop_whole_cent_floats_round_trip_exactly(
            value in -1_000_000i64..1_000_000i64,
        ) {
            // whole-cent floats survive the round trip exactly
            let amount = value as f64 / 100.0;
            let price = number_as_price(amount, Currency::Usd).unwrap();
            prop_assert_eq!(price.value, value as i128);
        }
    }
}
