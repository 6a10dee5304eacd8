// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{TimeZone, Utc};
use pricing_engine::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Pricing Engine Example ===\n");

    // Rate snapshot as it would arrive from the rates service
    let rates = ExchangeRates::new(Utc.with_ymd_and_hms(2024, 1, 4, 19, 4, 15).unwrap())
        .with_rate(Currency::Gas, 1.0)
        .with_rate(Currency::Usd, 1.0)
        .with_rate(Currency::Eth, 2_277.565_706_76)
        .with_rate(Currency::Weth, 2_277.565_706_76)
        .with_rate(Currency::Dai, 1.000_053_8)
        .with_rate(Currency::Usdc, 0.999_969_38);

    // A domain listed at 1.25 ETH
    let listing = Price::new(1_250_000_000_000_000_000, Currency::Eth);
    let decorated = FormatOptions {
        with_symbol: true,
        with_acronym: true,
    };

    println!("Listing price: {}", format_price(listing, decorated));

    for target in [Currency::Usd, Currency::Dai, Currency::Usdc] {
        let converted = convert_currency_with_rates(listing, target, &rates)
            .expect("snapshot carries every currency");
        println!("  = {}", format_price(converted, decorated));
    }

    // Marketplace fee of 5%, settled in the listing currency
    let fee = multiply_price_by_number(listing, 0.05).expect("fee factor is in range");
    let seller_take = subtract_prices(listing, fee).expect("same currency");
    println!("\nFee (5%):      {}", format_price(fee, decorated));
    println!("Seller take:   {}", format_price(seller_take, decorated));

    // Premium decay on a domain that just left its grace period
    println!("\nPremium decay after release:");
    let released_at = Utc.with_ymd_and_hms(2024, 2, 4, 13, 50, 23).unwrap().timestamp();
    for days in [0i64, 1, 7, 14, 20, 21] {
        let now = released_at + days * ONE_DAY_IN_SECONDS;
        let premium = premium_price_at(now, released_at);
        println!(
            "  day {:>2}: {}",
            days,
            format_price(
                premium,
                FormatOptions {
                    with_symbol: true,
                    ..Default::default()
                }
            )
        );
    }
}
