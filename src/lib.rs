// ============================================================================
// Pricing Engine Library
// Exact fixed-point pricing core for a multi-currency domain marketplace
// ============================================================================

//! # Pricing Engine
//!
//! The money core of a domain-name marketplace: exact smallest-unit
//! arithmetic over a closed set of currencies, conversion through
//! USD-pegged rate snapshots, display formatting with underflow/overflow
//! sentinels, and the time-decaying premium charged on freshly released
//! domains.
//!
//! ## Features
//!
//! - **Integer-exact magnitudes** held as i128 smallest units (cents, wei)
//! - **Controlled float boundary**: exchange rates and scale factors are
//!   fixed into rationals before touching a magnitude
//! - **Total display formatting**: every magnitude renders; out-of-range
//!   values become per-currency sentinels instead of errors
//! - **Pure functions** with no global state and no I/O, safe to call from
//!   any thread without locking
//!
//! ## Example
//!
//! ```rust
//! use pricing_engine::prelude::*;
//!
//! // A $1,500.00 listing and a $25.00 service fee, held as exact cents
//! let listing = Price::new(150_000, Currency::Usd);
//! let fee = Price::new(2_500, Currency::Usd);
//! let total = add_prices(&[listing, fee]).unwrap();
//!
//! let label = format_price(
//!     total,
//!     FormatOptions { with_symbol: true, with_acronym: true },
//! );
//! assert_eq!(label, "$1,525.00 USD");
//!
//! // Release-day premium on a freshly expired domain
//! let premium = premium_price_at(1_707_054_623, 1_707_054_623);
//! assert_eq!(format_price(premium, FormatOptions::default()), "99,999,952.32");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        add_prices, approx_scale_price, multiply_price_by_number, number_as_price,
        price_as_number, subtract_prices, Currency, CurrencyFormat, ExchangeRates, Price,
        PriceError, PriceResult, CURRENCY_FORMATS,
    };
    pub use crate::engine::{
        convert_currency_with_rates, format_price, premium_price_after_expiration,
        premium_price_at, premium_price_at_time, FormatOptions, GRACE_PERIOD,
        ONE_DAY_IN_SECONDS, PREMIUM_OFFSET, PREMIUM_PERIOD, PREMIUM_START_PRICE,
    };
}
