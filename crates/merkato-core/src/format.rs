//! Display formatting for prices and category-specific sizes.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::product::{NumberOrText, ProductSize};

/// Formats a price for display.
///
/// Whole amounts render as plain integers (`"10"`); fractional amounts render
/// with exactly two decimals, rounding midpoints away from zero, so
/// `"7.005"` renders as `"7.01"`. Unparsable text renders as `"N/A"`.
#[must_use]
pub fn format_price(value: &NumberOrText) -> String {
    let Some(amount) = value.as_decimal() else {
        return "N/A".to_string();
    };

    if amount.fract().is_zero() {
        amount.trunc().to_string()
    } else {
        two_decimals(amount)
    }
}

/// Renders a size record for display, dispatched on the category name
/// (case-insensitive).
///
/// - `SHOES`: `"{size} {metric}"` trimmed, `"N/A"` when both are empty.
/// - `CLOTHING`: present measurements joined in a fixed order (`Fit` bare,
///   the rest with a `cm` suffix, free-form `Custom` last), falling back to
///   the letter size, then `"N/A"`.
/// - `ACCESSORIES`: the free-form custom size, or `"N/A"`.
/// - Anything else, or an absent size record: `"N/A"`.
#[must_use]
pub fn format_size(size: Option<&ProductSize>, category_name: &str) -> String {
    const NOT_AVAILABLE: &str = "N/A";

    let Some(size) = size else {
        return NOT_AVAILABLE.to_string();
    };

    match category_name.to_uppercase().as_str() {
        "SHOES" => {
            let value = size
                .size
                .filter(|v| !v.is_zero())
                .map(plain_number)
                .unwrap_or_default();
            let metric = size.metric.as_deref().unwrap_or("");
            let joined = format!("{value} {metric}").trim().to_string();
            if joined.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                joined
            }
        }
        "CLOTHING" => {
            let mut measurements = Vec::new();
            if let Some(fit) = present(size.fit.as_deref()) {
                measurements.push(format!("Fit: {fit}"));
            }
            for (label, value) in [
                ("Bust", size.bust),
                ("Waist", size.waist),
                ("Hips", size.hips),
                ("Length", size.length),
                ("Sleeve", size.sleeve),
            ] {
                if let Some(v) = value.filter(|v| !v.is_zero()) {
                    measurements.push(format!("{label}: {}cm", plain_number(v)));
                }
            }
            if let Some(custom) = present(size.custom_size.as_deref()) {
                measurements.push(format!("Custom: {custom}"));
            }

            if measurements.is_empty() {
                present(size.size_letter.as_deref())
                    .unwrap_or(NOT_AVAILABLE)
                    .to_string()
            } else {
                measurements.join(", ")
            }
        }
        "ACCESSORIES" => present(size.custom_size.as_deref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Rounds to two decimal places, midpoints away from zero, and renders with
/// trailing zeros kept.
fn two_decimals(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Renders a measurement value without a spurious fractional part.
fn plain_number(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.trunc().to_string()
    } else {
        value.normalize().to_string()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
