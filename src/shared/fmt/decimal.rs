//! `Decimal` formatting with a fixed number of decimals.
//!
//! Amounts keep their trailing zeros (`1.5` at 4 decimals is `1.5000`) so that columns
//! line up; rounding is midpoint-away-from-zero.

use super::num::group_thousands;
use rust_decimal::prelude::*;

/// `1234.5` → `"1,234.50"` at 2 decimals.
pub fn format_number(value: &Decimal, decimals: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.*}", decimals as usize, rounded);
    group_thousands(&fixed)
}

/// `1234.5` with sign `"$"` → `"$1,234.50"`; negatives render as `"-$1,234.50"`.
pub fn format_currency(value: &Decimal, sign: &str, decimals: u32) -> String {
    let body = format_number(&value.abs(), decimals);
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}{}", sign, body)
    } else {
        format!("{}{}", sign, body)
    }
}

/// A fractional change as a signed percentage: `0.0909` → `"+9.09%"`.
///
/// `None` if the percentage does not fit in a `Decimal`.
pub fn format_percent(fraction: &Decimal, decimals: u32) -> Option<String> {
    let pct = fraction.checked_mul(Decimal::ONE_HUNDRED)?;
    let body = format_number(&pct.abs(), decimals);
    let text = if pct.is_zero() || body.chars().all(|c| c == '0' || c == '.' || c == ',') {
        format!("{}%", body)
    } else if pct.is_sign_negative() {
        format!("-{}%", body)
    } else {
        format!("+{}%", body)
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_number_pads_decimals() {
        assert_eq!(format_number(&dec("1.5"), 4), "1.5000");
        assert_eq!(format_number(&dec("1234.5"), 2), "1,234.50");
        assert_eq!(format_number(&Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_format_number_rounds() {
        assert_eq!(format_number(&dec("1.005"), 2), "1.01");
        assert_eq!(format_number(&dec("-1234567.891"), 2), "-1,234,567.89");
        assert_eq!(format_number(&dec("999.999"), 2), "1,000.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(&dec("1234.5"), "$", 2), "$1,234.50");
        assert_eq!(format_currency(&dec("-3"), "$", 2), "-$3.00");
        assert_eq!(format_currency(&dec("1.08123"), "$", 4), "$1.0812");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(&dec("0.090909"), 2).as_deref(), Some("+9.09%"));
        assert_eq!(format_percent(&dec("-0.125"), 2).as_deref(), Some("-12.50%"));
        assert_eq!(format_percent(&Decimal::ZERO, 2).as_deref(), Some("0.00%"));
        assert_eq!(format_percent(&dec("-0.00001"), 2).as_deref(), Some("0.00%"));
    }

    #[test]
    fn test_format_percent_overflow() {
        assert_eq!(format_percent(&Decimal::MAX, 2), None);
        assert_eq!(format_percent(&Decimal::MIN, 2), None);
    }
}
