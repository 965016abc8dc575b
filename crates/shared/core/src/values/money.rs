//! Display helpers for cent-denominated amounts and large counts.

use rust_decimal::Decimal;

use super::Cents;

/// Convert a cent amount into dollars without losing precision
pub fn cents_to_dollars(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}

/// Format a cent amount as dollars with thousands separators,
/// e.g. `format_dollars(10_000_000, 0)` == `"$100,000"`.
///
/// Rounds half to even, matching the formatting of the generated scripts.
pub fn format_dollars(cents: Cents, decimal_places: u32) -> String {
    let mut dollars = cents_to_dollars(cents).round_dp(decimal_places);
    dollars.rescale(decimal_places);

    let text = dollars.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let sign = if dollars.is_sign_negative() && !dollars.is_zero() {
        "-"
    } else {
        ""
    };
    let grouped = group_digits(whole);

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Format an integer with `,` thousands separators
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
