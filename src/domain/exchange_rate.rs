// ============================================================================
// Exchange Rate Snapshot
// Caller-supplied USD-pegged rates, immutable per conversion call
// ============================================================================

use chrono::{DateTime, Utc};

use super::currency::Currency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A snapshot of USD-per-unit exchange rates.
///
/// Every rate is quoted against the US dollar (`rate(Usd) == 1.0` in a
/// well-formed snapshot), which lets any pair be crossed through USD. The
/// snapshot is owned by the caller and handed in per conversion call; the
/// core never caches, refreshes, or mutates it. Retrieval of the rates
/// themselves lives outside this crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExchangeRates {
    usd_per_unit: [Option<f64>; Currency::COUNT],
    saved_at: DateTime<Utc>,
}

impl ExchangeRates {
    /// Empty snapshot captured at `saved_at`; rates are filled via
    /// [`with_rate`](Self::with_rate) or [`set_rate`](Self::set_rate).
    pub fn new(saved_at: DateTime<Utc>) -> Self {
        Self {
            usd_per_unit: [None; Currency::COUNT],
            saved_at,
        }
    }

    /// Builder-style rate insertion.
    #[must_use]
    pub fn with_rate(mut self, currency: Currency, usd_per_unit: f64) -> Self {
        self.set_rate(currency, usd_per_unit);
        self
    }

    pub fn set_rate(&mut self, currency: Currency, usd_per_unit: f64) {
        self.usd_per_unit[currency.index()] = Some(usd_per_unit);
    }

    /// USD-per-unit rate for a currency, if the snapshot carries one.
    #[inline]
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.usd_per_unit[currency.index()]
    }

    /// Capture time of the snapshot.
    #[inline]
    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }
}
