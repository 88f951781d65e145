//! Display formatting. Every function here is total: any `Decimal` produces a string.

use core_types::DecimalExt;
use rust_decimal::Decimal;

/// `$1,438.92`, `-$12.50`. Rounds to whole cents, midpoint away from zero.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_currency();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// `$2.1M`, `$450K`, `$50`. For tight columns and chart axes.
///
/// The unit is chosen after rounding, so `999,950` is `$1.0M` rather than `$1000K`.
pub fn format_currency_compact(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let abs = value.abs();
    let thousand = Decimal::from(1_000);
    let million = Decimal::from(1_000_000);
    let billion = Decimal::from(1_000_000_000);

    let whole = abs.round_dp(0);
    if whole < thousand {
        return format!("{}${:.0}", sign, whole);
    }
    let thousands = (abs / thousand).round_dp(0);
    if thousands < thousand {
        return format!("{}${:.0}K", sign, thousands);
    }
    let millions = (abs / million).round_dp(1);
    if millions < thousand {
        return format!("{}${:.1}M", sign, millions);
    }
    format!("{}${:.1}B", sign, (abs / billion).round_dp(1))
}

/// `6.00%`. Takes a value already in percent.
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_has_separators_and_two_decimals() {
        assert_eq!(format_currency(dec!(1438.921260366)), "$1,438.92");
        assert_eq!(format_currency(dec!(278011.6537)), "$278,011.65");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567.00");
        assert_eq!(format_currency(dec!(999.995)), "$1,000.00");
        assert_eq!(format_currency(dec!(12)), "$12.00");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn negative_currency_puts_the_sign_first() {
        assert_eq!(format_currency(dec!(-12.5)), "-$12.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn large_values_still_format() {
        assert_eq!(
            format_currency(dec!(123456789012345678.9)),
            "$123,456,789,012,345,678.90"
        );
        assert_eq!(format_currency(dec!(-1000000.004)), "-$1,000,000.00");
    }

    #[test]
    fn compact_currency_picks_a_unit() {
        assert_eq!(format_currency_compact(dec!(2100000)), "$2.1M");
        assert_eq!(format_currency_compact(dec!(450000)), "$450K");
        assert_eq!(format_currency_compact(dec!(50)), "$50");
        assert_eq!(format_currency_compact(dec!(-3500000000)), "-$3.5B");
    }

    #[test]
    fn compact_currency_moves_up_a_unit_when_rounding_reaches_it() {
        assert_eq!(format_currency_compact(dec!(999950)), "$1.0M");
        assert_eq!(format_currency_compact(dec!(999.6)), "$1K");
        assert_eq!(format_currency_compact(dec!(999.4)), "$999");
        assert_eq!(format_currency_compact(dec!(999400)), "$999K");
    }

    #[test]
    fn percentages_use_two_decimals() {
        assert_eq!(format_percentage(dec!(6)), "6.00%");
        assert_eq!(format_percentage(dec!(6.16778)), "6.17%");
        assert_eq!(format_percentage(Decimal::ZERO), "0.00%");
    }
}
