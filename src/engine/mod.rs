// ============================================================================
// Engine Module
// Conversion, display formatting, and premium pricing built on the domain
// ============================================================================

pub mod converter;
pub mod formatter;
pub mod premium;

pub use converter::convert_currency_with_rates;
pub use formatter::{format_price, FormatOptions};
pub use premium::{
    premium_price_after_expiration, premium_price_at, premium_price_at_time, GRACE_PERIOD,
    ONE_DAY_IN_SECONDS, PREMIUM_OFFSET, PREMIUM_PERIOD, PREMIUM_START_PRICE,
};
