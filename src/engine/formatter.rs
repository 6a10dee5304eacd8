// ============================================================================
// Display Formatter
// Renders prices as grouped decimal strings with underflow/overflow
// sentinels
// ============================================================================

use crate::domain::{CurrencyFormat, Price};
use crate::numeric::pow10;

/// Decoration flags for [`format_price`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prefix the currency symbol (skipped when it equals the acronym)
    pub with_symbol: bool,

    /// Append the acronym after a space
    pub with_acronym: bool,
}

/// Render a price for display.
///
/// The magnitude is rounded to the currency's display decimals in pure
/// integer arithmetic, grouped with thousands separators, and substituted
/// with the currency's underflow or overflow sentinel where the table says
/// so. A true zero renders as zero ("0.00"), never as the underflow
/// sentinel.
///
/// Total function: any i128 magnitude in any currency produces a string,
/// deterministically.
pub fn format_price(price: Price, options: FormatOptions) -> String {
    let format = price.currency.format();
    let body = format_amount(price.value, format);

    let mut out = String::with_capacity(body.len() + 8);
    if options.with_symbol && format.symbol != format.acronym {
        out.push_str(format.symbol);
    }
    out.push_str(&body);
    if options.with_acronym {
        out.push(' ');
        out.push_str(format.acronym);
    }
    out
}

fn format_amount(value: i128, format: &CurrencyFormat) -> String {
    let step = pow10(format.decimals - format.display_decimals);
    let display_units = round_half_away(value, step);

    if value == 0 {
        return zero_display(format.display_decimals);
    }
    if display_units == 0 || value <= format.min_display_value {
        // Non-zero but too small to show distinctly: render the floor itself
        return min_display(format);
    }
    if display_units > format.max_display_value {
        return format.overflow_display.to_string();
    }

    grouped_display(display_units, format.display_decimals)
}

/// Divide by `step` rounding half away from zero, without ever forming an
/// intermediate that can overflow.
fn round_half_away(value: i128, step: i128) -> i128 {
    let quotient = value / step;
    let remainder = value % step;

    if remainder.abs() * 2 >= step {
        quotient + remainder.signum()
    } else {
        quotient
    }
}

fn zero_display(display_decimals: u32) -> String {
    if display_decimals == 0 {
        "0".to_string()
    } else {
        format!("0.{:0>width$}", "", width = display_decimals as usize)
    }
}

/// The underflow sentinel: `min_display_value` in its own exact decimal
/// form, trailing fractional zeros trimmed ("0.01", "0.0001", "1").
fn min_display(format: &CurrencyFormat) -> String {
    let scale = pow10(format.decimals);
    let whole = format.min_display_value / scale;
    let fraction = format.min_display_value % scale;

    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0>width$}", fraction, width = format.decimals as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

fn grouped_display(display_units: i128, display_decimals: u32) -> String {
    let magnitude = display_units.unsigned_abs();
    let scale = pow10(display_decimals) as u128;
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    let mut out = String::new();
    if display_units < 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if display_decimals > 0 {
        out.push('.');
        out.push_str(&format!(
            "{:0>width$}",
            fraction,
            width = display_decimals as usize
        ));
    }
    out
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ============================================================================
// Tests
// ============================================================================
