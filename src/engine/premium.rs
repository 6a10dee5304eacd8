// ============================================================================
// Temporary Premium Decay
// Anti-squatting surcharge on freshly released domains
// ============================================================================

use chrono::{DateTime, Utc};

use crate::domain::{approx_scale_price, Currency, Price};

/// One day, in whole seconds.
pub const ONE_DAY_IN_SECONDS: i64 = 86_400;

/// Delay between a domain's expiration and its release to the market.
pub const GRACE_PERIOD: i64 = 90 * ONE_DAY_IN_SECONDS;

/// Length of the decay window; after this the premium is gone.
pub const PREMIUM_PERIOD: i64 = 21 * ONE_DAY_IN_SECONDS;

/// Premium at the instant of release: $100,000,000.00.
pub const PREMIUM_START_PRICE: Price = Price::new(10_000_000_000, Currency::Usd);

/// The start price carried through the full 21-day decay,
/// floor($100M * 0.5^21) = $47.68. Subtracting it pulls the curve to
/// exactly zero at the end of the window instead of leaving a residual
/// tail. The numeric tests pin this constant to the scaler's output.
pub const PREMIUM_OFFSET: Price = Price::new(4_768, Currency::Usd);

/// Premium owed at `now` for a domain released at `released_at`
/// (expiration plus grace period), both in unix seconds.
///
/// The premium starts at `PREMIUM_START_PRICE - PREMIUM_OFFSET` and halves
/// every day; the halving factor is applied to the start price through the
/// fixed-point scaler so the curve stays exact over the full magnitude.
/// Monotonically non-increasing in elapsed time, clamped to the full
/// premium before release and to zero after the window. Never fails.
pub fn premium_price_at(now: i64, released_at: i64) -> Price {
    let elapsed = now.saturating_sub(released_at).max(0);
    if elapsed >= PREMIUM_PERIOD {
        return Price::zero(Currency::Usd);
    }

    let days_elapsed = elapsed as f64 / ONE_DAY_IN_SECONDS as f64;
    let decay_factor = 0.5f64.powf(days_elapsed);

    let decayed = approx_scale_price(PREMIUM_START_PRICE, decay_factor)
        .expect("decay factor is in (0, 1] and the start price is far from the i128 edge");

    let value = (decayed.value - PREMIUM_OFFSET.value).max(0);
    Price::new(value, Currency::Usd)
}

/// Premium owed at `now` for a domain that expired at `expiration`,
/// before the grace period is accounted for.
pub fn premium_price_after_expiration(now: i64, expiration: i64) -> Price {
    premium_price_at(now, expiration.saturating_add(GRACE_PERIOD))
}

/// Wall-clock convenience over [`premium_price_at`].
pub fn premium_price_at_time(now: DateTime<Utc>, released_at: DateTime<Utc>) -> Price {
    premium_price_at(now.timestamp(), released_at.timestamp())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subtract_prices;
    use chrono::TimeZone;

    // 2024-02-04 13:50:23 UTC
    const NOW: i64 = 1_707_054_623;

    #[test]
    fn test_offset_matches_fully_decayed_start_price() {
        let fully_decayed = approx_scale_price(PREMIUM_START_PRICE, 0.5f64.powi(21)).unwrap();
        assert_eq!(fully_decayed, PREMIUM_OFFSET);
    }

    #[test]
    fn test_released_just_now_charges_full_premium() {
        let expected = subtract_prices(PREMIUM_START_PRICE, PREMIUM_OFFSET).unwrap();
        assert_eq!(premium_price_at(NOW, NOW), expected);
        assert_eq!(premium_price_at(NOW, NOW).value, 9_999_995_232);
    }

    #[test]
    fn test_released_twenty_days_ago() {
        let released_at = NOW - 20 * ONE_DAY_IN_SECONDS;
        assert_eq!(
            premium_price_at(NOW, released_at),
            Price::new(4_768, Currency::Usd)
        );
    }

    #[test]
    fn test_released_twenty_and_a_half_days_ago() {
        let released_at = NOW - 41 * ONE_DAY_IN_SECONDS / 2;
        assert_eq!(
            premium_price_at(NOW, released_at),
            Price::new(1_975, Currency::Usd)
        );
    }

    #[test]
    fn test_released_a_day_and_a_half_ago() {
        let released_at = NOW - 3 * ONE_DAY_IN_SECONDS / 2;
        assert_eq!(
            premium_price_at(NOW, released_at),
            Price::new(3_535_529_137, Currency::Usd)
        );
    }

    #[test]
    fn test_one_minute_before_the_window_closes() {
        let released_at = NOW - (PREMIUM_PERIOD - 60);
        assert_eq!(premium_price_at(NOW, released_at), Price::new(2, Currency::Usd));
    }

    #[test]
    fn test_window_edge_and_beyond_are_free() {
        assert_eq!(
            premium_price_at(NOW, NOW - PREMIUM_PERIOD),
            Price::zero(Currency::Usd)
        );
        assert_eq!(
            premium_price_at(NOW, NOW - 400 * ONE_DAY_IN_SECONDS),
            Price::zero(Currency::Usd)
        );
    }

    #[test]
    fn test_before_release_clamps_to_full_premium() {
        let expected = subtract_prices(PREMIUM_START_PRICE, PREMIUM_OFFSET).unwrap();
        assert_eq!(premium_price_at(NOW, NOW + ONE_DAY_IN_SECONDS), expected);
        assert_eq!(premium_price_at(NOW, i64::MAX), expected);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut last = i128::MAX;
        for hours in 0..(21 * 24) {
            let released_at = NOW - hours * 3_600;
            let premium = premium_price_at(NOW, released_at);
            assert!(premium.value <= last);
            assert!(premium.value > 0);
            last = premium.value;
        }
    }

    #[test]
    fn test_grace_period_wrapper() {
        let expiration = NOW - GRACE_PERIOD - 20 * ONE_DAY_IN_SECONDS;
        assert_eq!(
            premium_price_after_expiration(NOW, expiration),
            Price::new(4_768, Currency::Usd)
        );

        // Still inside the grace period: release has not happened yet
        let expected = subtract_prices(PREMIUM_START_PRICE, PREMIUM_OFFSET).unwrap();
        assert_eq!(premium_price_after_expiration(NOW, NOW - ONE_DAY_IN_SECONDS), expected);
    }

    #[test]
    fn test_wall_clock_convenience() {
        let now = Utc.timestamp_opt(NOW, 0).unwrap();
        let released_at = Utc.timestamp_opt(NOW - 20 * ONE_DAY_IN_SECONDS, 0).unwrap();
        assert_eq!(
            premium_price_at_time(now, released_at),
            Price::new(4_768, Currency::Usd)
        );
    }
}
