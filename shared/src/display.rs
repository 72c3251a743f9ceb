//! Rendering of computed values for the result cards

use crate::models::{KG_PER_TON, QUINTAL_PER_TON};
use crate::normalize::group_thousands;
use crate::types::WeightUnit;

/// Fractional digits shown for ton/ha and kw/ha results and summaries
pub const RESULT_DECIMALS: usize = 2;

/// Widest fractional precision honoured; larger requests are clamped
pub const MAX_DISPLAY_DECIMALS: usize = 340;

/// Format a number with `.` grouping and `,` decimals.
///
/// Shows at most `max_decimals` fractional digits and drops trailing zeros,
/// so `1584.80` renders as `1.584,8` and `15848.00` as `15.848`. When the
/// shortest round-trip digits of `value` fit in `max_decimals` they are shown
/// as is (`0.1` stays `0,1` at any precision); otherwise rounding is half-even
/// on the exact binary value.
pub fn format_number_for_display(value: f64, max_decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rendered = fixed_digits(value.abs(), max_decimals.min(MAX_DISPLAY_DECIMALS));
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(integer))
    } else {
        format!("{sign}{},{fraction}", group_thousands(integer))
    }
}

fn fixed_digits(value: f64, max_decimals: usize) -> String {
    let shortest = value.to_string();
    let fraction_len = shortest.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if fraction_len <= max_decimals {
        shortest
    } else {
        format!("{:.*}", max_decimals, value)
    }
}

/// Scale a ton/ha value into `unit`
pub fn convert_ton_per_ha(ton_per_ha: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::TonPerHa => ton_per_ha,
        WeightUnit::QuintalPerHa => ton_per_ha * QUINTAL_PER_TON,
        WeightUnit::KgPerHa => ton_per_ha * KG_PER_TON,
    }
}

/// Display precision for a unit
pub fn decimals_for(unit: WeightUnit) -> usize {
    match unit {
        WeightUnit::KgPerHa => 0,
        WeightUnit::TonPerHa | WeightUnit::QuintalPerHa => RESULT_DECIMALS,
    }
}

/// Render a stored ton/ha result in the selected unit
pub fn render_result(ton_per_ha: f64, unit: WeightUnit) -> String {
    format_number_for_display(convert_ton_per_ha(ton_per_ha, unit), decimals_for(unit))
}
