//! Utility functions for formatting
//!
//! Centralized formatting for consistent display of currency amounts and
//! percentages throughout the application.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a Decimal as whole US dollars: "$1,234"
///
/// Uses en-US conventions with a `,` thousands separator and no fraction
/// digits. Halves round away from zero.
///
/// # Examples
/// ```
/// use retention_roi::utils::format_usd;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_usd(dec!(30000)), "$30,000");
/// assert_eq!(format_usd(dec!(-1234.5)), "-$1,235");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&rounded.abs().trunc().to_string()))
}

/// Format a whole count with thousands separators: "1,250"
///
/// # Examples
/// ```
/// use retention_roi::utils::format_count;
///
/// assert_eq!(format_count(1250), "1,250");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a percentage without trailing zeros: "7.5%", "5%"
///
/// # Examples
/// ```
/// use retention_roi::utils::format_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_percent(dec!(7.50)), "7.5%");
/// assert_eq!(format_percent(dec!(5.0)), "5%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

fn group_thousands(digits: &str) -> String {
    digits
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}
