//! Display formatting for amounts and hours
//!
//! Amounts are rounded to cents here and nowhere else. Raw option prices
//! use a dash for "no charge"; computed amounts always show digits, so a
//! zero subtotal renders as `$0.00`.

use crate::quoting::domain::LaborCategory;

/// Formats a computed amount as `$X.XX`
pub fn format_currency(amount: f64) -> String {
    format!("${}", to_fixed_2(amount))
}

/// Formats a raw option price: `$-` when absent or zero
pub fn format_option_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 && !p.is_nan() => format_currency(p),
        _ => "$-".to_string(),
    }
}

/// Formats an hour count with no trailing `.0` on whole numbers
pub fn format_hours(hours: f64) -> String {
    format!("{}", hours)
}

/// Formats an hour row label, e.g. `3 Installation Hours`
pub fn format_hours_label(hours: f64, category: LaborCategory) -> String {
    format!("{} {}", format_hours(hours), category.label())
}

/// Two-decimal rendering with exact half-cents rounded away from zero
///
/// Only multiples of 1/8 can sit exactly on a half-cent in binary
/// floating point, so those are the only values that need special
/// handling; everything else is already correctly rounded by `{:.2}`.
fn to_fixed_2(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let cents = amount * 100.0;
    if (amount * 8.0).fract() == 0.0 && cents.fract() != 0.0 {
        return format!("{:.2}", cents.round() / 100.0);
    }
    format!("{:.2}", amount)
}
