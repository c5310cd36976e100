//! Display formatting for wire-encoded numbers.
//!
//! Values are rounded half away from zero to two decimal places. A value
//! that is strictly negative keeps its minus sign even when it rounds to
//! zero, so `-0.004999` reads `-0.00`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::asset::parse_decimal;

/// Placeholder shown for a field that is missing or not numeric.
pub const NOT_AVAILABLE: &str = "n/a";

/// Parses `raw` and formats it with exactly two decimals.
pub fn two_decimals(raw: &str) -> Option<String> {
    parse_decimal(raw).map(format_decimal)
}

/// Formats a decimal with exactly two decimals.
pub fn format_decimal(value: Decimal) -> String {
    let mut rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    if value < Decimal::ZERO {
        format!("-{rounded}")
    } else {
        rounded.to_string()
    }
}

/// `$1234.50`, or the placeholder.
pub fn price_label(raw: Option<&str>) -> String {
    match raw.and_then(two_decimals) {
        Some(value) => format!("${value}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `-1.23% (24h)`, or the placeholder.
pub fn change_label(raw: Option<&str>) -> String {
    match raw.and_then(two_decimals) {
        Some(value) => format!("{value}% (24h)"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Whether a change value is strictly negative. Non-numeric input is not.
pub fn is_negative(raw: Option<&str>) -> bool {
    raw.and_then(parse_decimal)
        .is_some_and(|value| value < Decimal::ZERO)
}
