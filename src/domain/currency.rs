// ============================================================================
// Currency Domain Model
// The closed currency set and its static display configuration
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currencies accepted on the marketplace.
///
/// The set is closed: it indexes the static format table and every rate
/// snapshot, and it does not grow at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    /// Blockchain gas units, quoted as whole units
    Gas,
    /// US dollar, smallest unit is the cent
    Usd,
    /// Ether, smallest unit is the wei
    Eth,
    /// Wrapped Ether, wei-denominated like Eth
    Weth,
    /// Dai stablecoin, 18-decimal token units
    Dai,
    /// USD Coin, 6-decimal token units
    Usdc,
}

impl Currency {
    /// Number of currencies in the closed set
    pub const COUNT: usize = 6;

    /// Every currency, in table order
    pub const ALL: [Currency; Self::COUNT] = [
        Currency::Gas,
        Currency::Usd,
        Currency::Eth,
        Currency::Weth,
        Currency::Dai,
        Currency::Usdc,
    ];

    /// Ordinal used to index the format table and rate snapshots.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display configuration for this currency.
    #[inline]
    pub fn format(self) -> &'static CurrencyFormat {
        &CURRENCY_FORMATS[self as usize]
    }

    /// Smallest-unit decimal exponent (cents = 2, wei = 18).
    #[inline]
    pub fn decimals(self) -> u32 {
        self.format().decimals
    }

    /// Ticker-style acronym ("USD", "ETH", ...).
    #[inline]
    pub fn acronym(self) -> &'static str {
        self.format().acronym
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

// ============================================================================
// Currency Format Table
// ============================================================================

/// Per-currency display constants, loaded once and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency this row belongs to
    pub currency: Currency,

    /// Decimal exponent of the smallest unit
    pub decimals: u32,

    /// Fraction digits rendered on screen (<= decimals)
    pub display_decimals: u32,

    /// Underflow floor in smallest units: amounts at or below it render as
    /// the floor's own decimal form instead of a rounded-to-zero value
    pub min_display_value: i128,

    /// Largest renderable value, counted in rounded display units
    /// (steps of 10^-display_decimals)
    pub max_display_value: i128,

    /// Sentinel shown when the display value exceeds `max_display_value`
    pub overflow_display: &'static str,

    /// Prefix symbol; suppressed when identical to the acronym
    pub symbol: &'static str,

    /// Suffix acronym
    pub acronym: &'static str,
}

/// Static format table, indexed by `Currency::index()`.
pub static CURRENCY_FORMATS: [CurrencyFormat; Currency::COUNT] = [
    CurrencyFormat {
        currency: Currency::Gas,
        decimals: 0,
        display_decimals: 0,
        min_display_value: 1,
        max_display_value: 350_000,
        overflow_display: ">350,000",
        symbol: "GAS",
        acronym: "GAS",
    },
    CurrencyFormat {
        currency: Currency::Usd,
        decimals: 2,
        display_decimals: 2,
        min_display_value: 1,
        max_display_value: 9_999_999_999,
        overflow_display: ">99,999,999.99",
        symbol: "$",
        acronym: "USD",
    },
    CurrencyFormat {
        currency: Currency::Eth,
        decimals: 18,
        display_decimals: 3,
        min_display_value: 100_000_000_000_000,
        max_display_value: 9_999_999_990,
        overflow_display: ">9,999,999.99",
        symbol: "Ξ",
        acronym: "ETH",
    },
    CurrencyFormat {
        currency: Currency::Weth,
        decimals: 18,
        display_decimals: 3,
        min_display_value: 100_000_000_000_000,
        max_display_value: 9_999_999_990,
        overflow_display: ">9,999,999.99",
        symbol: "Ξ",
        acronym: "WETH",
    },
    CurrencyFormat {
        currency: Currency::Dai,
        decimals: 18,
        display_decimals: 2,
        min_display_value: 100_000_000_000_000,
        max_display_value: 9_999_999_999,
        overflow_display: ">99,999,999.99",
        symbol: "◈",
        acronym: "DAI",
    },
    CurrencyFormat {
        currency: Currency::Usdc,
        decimals: 6,
        display_decimals: 2,
        min_display_value: 1,
        max_display_value: 9_999_999_999,
        overflow_display: ">99,999,999.99",
        symbol: "$",
        acronym: "USDC",
    },
];

// ============================================================================
// Tests
// ============================================================================
