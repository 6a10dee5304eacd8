// ============================================================================
// Currency Converter
// Crosses amounts between currencies through a USD-pegged rate snapshot
// ============================================================================

use crate::domain::{
    number_as_price, price_as_number, Currency, ExchangeRates, Price, PriceError, PriceResult,
};

/// Convert a price into another currency using a shared rate snapshot.
///
/// The cross rate is `rates[from] / rates[to]`, both quoted in USD per
/// unit. The amount crosses the float boundary once in each direction, so
/// a conversion between currencies with equal rates reproduces the amount
/// to within one smallest unit. There is intentionally no same-currency
/// shortcut; callers relying on exact idempotence should compare
/// currencies themselves.
///
/// # Errors
/// `InvalidRate` when either currency's rate is absent, non-finite, or not
/// strictly positive.
pub fn convert_currency_with_rates(
    from: Price,
    to: Currency,
    rates: &ExchangeRates,
) -> PriceResult<Price> {
    let from_rate = usd_rate(rates, from.currency)?;
    let to_rate = usd_rate(rates, to)?;

    let rate = from_rate / to_rate;
    let exchanged = price_as_number(from) * rate;
    let converted = number_as_price(exchanged, to)?;

    tracing::debug!(
        "converted {} {} -> {} {} at cross rate {}",
        from.value,
        from.currency,
        converted.value,
        to,
        rate
    );

    Ok(converted)
}

fn usd_rate(rates: &ExchangeRates, currency: Currency) -> PriceResult<f64> {
    match rates.rate(currency) {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        other => Err(PriceError::InvalidRate {
            currency,
            rate: other,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
