//! Lenient float parsing for free-form rating text.

const INFINITY_LITERAL: &str = "Infinity";

/// Parses the number at the start of `raw`, ignoring whatever follows it.
///
/// Leading whitespace is skipped. The longest prefix of the form
/// `[+-]digits[.digits][e[+-]digits]` is parsed (either side of the decimal
/// point may be empty, but not both), as is a signed `Infinity`. Returns
/// `None` when no number starts the text, including for `NaN`.
///
/// # Example
///
/// ```
/// use bookrate::rating::parse_leading_float;
///
/// assert_eq!(parse_leading_float("  4.5 stars"), Some(4.5));
/// assert_eq!(parse_leading_float(".5"), Some(0.5));
/// assert_eq!(parse_leading_float("abc"), None);
/// ```
#[must_use]
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let prefix_len = numeric_prefix_len(text.as_bytes());
    if prefix_len == 0 {
        return parse_infinity(text);
    }
    text.get(..prefix_len)?.parse::<f64>().ok()
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(bytes, sign_len);
    let mut cursor = sign_len + int_digits;

    let mut frac_digits = 0;
    if bytes.get(cursor) == Some(&b'.') {
        frac_digits = count_digits(bytes, cursor + 1);
        if int_digits > 0 || frac_digits > 0 {
            cursor += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }
    cursor + exponent_len(bytes, cursor)
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .iter()
        .skip(start)
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}

/// Length of a complete exponent at `start`, or zero when there is none.
fn exponent_len(bytes: &[u8], start: usize) -> usize {
    if !matches!(bytes.get(start), Some(b'e' | b'E')) {
        return 0;
    }
    let sign_len = usize::from(matches!(bytes.get(start + 1), Some(b'+' | b'-')));
    let digits = count_digits(bytes, start + 1 + sign_len);
    if digits == 0 { 0 } else { 1 + sign_len + digits }
}

fn parse_infinity(text: &str) -> Option<f64> {
    let (negative, unsigned) = text.strip_prefix('-').map_or_else(
        || (false, text.strip_prefix('+').unwrap_or(text)),
        |rest| (true, rest),
    );
    if !unsigned.starts_with(INFINITY_LITERAL) {
        return None;
    }
    Some(if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}
