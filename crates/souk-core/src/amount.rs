//! # Amount Module
//!
//! Numeric helpers shared by the cart and the screens: coercing text input to
//! numbers, and turning computed amounts into display strings.
//!
//! ## Partial Parse With Fallback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Discount field text            parse_non_negative_number(text, 0.0)    │
//! │  ───────────────────            ───────────────────────────────────     │
//! │  "12.5"                    ──►  12.5                                    │
//! │  "  7 "                    ──►  7                                       │
//! │  "12abc"                   ──►  12     (leading number is kept)         │
//! │  "abc", "", "."            ──►  0      (fallback)                       │
//! │  "-3"                      ──►  0      (fallback, never negative)       │
//! │                                                                         │
//! │  Never an error: the field is never rejected or left invalid.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Totals are kept unrounded so they match what the server recomputes.
//! [`round_to`] and [`format_amount`] are for display only.

/// Parses the leading decimal number of `text`.
///
/// Returns `fallback` when there is no leading number, or when the number is
/// negative or not finite.
///
/// ## Example
/// ```rust
/// use souk_core::amount::parse_non_negative_number;
///
/// assert_eq!(parse_non_negative_number("12.5", 0.0), 12.5);
/// assert_eq!(parse_non_negative_number("12abc", 0.0), 12.0);
/// assert_eq!(parse_non_negative_number("abc", 0.0), 0.0);
/// assert_eq!(parse_non_negative_number("-3", 1.0), 1.0);
/// ```
pub fn parse_non_negative_number(text: &str, fallback: f64) -> f64 {
    match decimal_prefix(text.trim()).parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.abs(),
        _ => fallback,
    }
}

/// Parses a quantity field.
///
/// Takes the leading integer (`"3 pcs"` → 3, `"2.7"` → 2) and never returns
/// less than 1. Text without a leading integer gives 1.
pub fn parse_quantity(text: &str) -> i64 {
    integer_prefix(text.trim())
        .parse::<i64>()
        .map(|qty| qty.max(1))
        .unwrap_or(1)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats an amount for display, e.g. `"$12.34"` or `"-$5.50"`.
///
/// ## Example
/// ```rust
/// use souk_core::amount::format_amount;
///
/// assert_eq!(format_amount(1234.5, "$", 2), "$1234.50");
/// assert_eq!(format_amount(-5.5, "$", 2), "-$5.50");
/// assert_eq!(format_amount(80.0, "৳", 0), "৳80");
/// ```
pub fn format_amount(value: f64, symbol: &str, decimals: u8) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let rounded = round_to(value.abs(), decimals as u32);
    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!(
        "{}{}{:.*}",
        sign,
        symbol,
        decimals as usize,
        rounded
    )
}

// =============================================================================
// Prefix Scanners
// =============================================================================

/// Longest prefix matching `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn decimal_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &text[..end]
}

/// Longest prefix matching `[+-]? digits`.
fn integer_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        ""
    } else {
        &text[..sign + digits]
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_non_negative_number("0", 9.0), 0.0);
        assert_eq!(parse_non_negative_number("5", 0.0), 5.0);
        assert_eq!(parse_non_negative_number("12.75", 0.0), 12.75);
        assert_eq!(parse_non_negative_number(" 3.5 ", 0.0), 3.5);
        assert_eq!(parse_non_negative_number(".5", 0.0), 0.5);
        assert_eq!(parse_non_negative_number("4.", 0.0), 4.0);
        assert_eq!(parse_non_negative_number("1e2", 0.0), 100.0);
    }

    #[test]
    fn test_parse_keeps_leading_number() {
        assert_eq!(parse_non_negative_number("12abc", 0.0), 12.0);
        assert_eq!(parse_non_negative_number("7.5%", 0.0), 7.5);
        assert_eq!(parse_non_negative_number("3e", 0.0), 3.0);
        assert_eq!(parse_non_negative_number("1.2.3", 0.0), 1.2);
    }

    #[test]
    fn test_parse_falls_back() {
        assert_eq!(parse_non_negative_number("abc", 0.0), 0.0);
        assert_eq!(parse_non_negative_number("", 0.0), 0.0);
        assert_eq!(parse_non_negative_number(".", 2.0), 2.0);
        assert_eq!(parse_non_negative_number("-", 2.0), 2.0);
        assert_eq!(parse_non_negative_number("-3", 0.0), 0.0);
        assert_eq!(parse_non_negative_number("1e999", 0.0), 0.0);
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let value = parse_non_negative_number("-0", 5.0);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("3 pcs"), 3);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("many"), 1);
        assert_eq!(parse_quantity(""), 1);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345, 1), 2.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(199.999, 2), 200.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.99, "$", 2), "$10.99");
        assert_eq!(format_amount(5.0, "$", 2), "$5.00");
        assert_eq!(format_amount(-5.5, "$", 2), "-$5.50");
        assert_eq!(format_amount(0.0, "$", 2), "$0.00");
        assert_eq!(format_amount(-0.001, "$", 2), "$0.00");
        assert_eq!(format_amount(f64::NAN, "$", 2), "NaN");
    }
}
