// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod currency;
pub mod errors;
pub mod exchange_rate;
pub mod price;

pub use currency::{Currency, CurrencyFormat, CURRENCY_FORMATS};
pub use errors::{PriceError, PriceResult};
pub use exchange_rate::ExchangeRates;
pub use price::{
    add_prices, approx_scale_price, multiply_price_by_number, number_as_price, price_as_number,
    subtract_prices, Price,
};
