//! Lenient, locale-agnostic number parsing.
//!
//! Catalog sources and search queries carry numbers as free text. Both parsers read the longest
//! leading numeric prefix (after leading whitespace) and ignore whatever follows, so `"12.5 cm"`
//! parses as `12.5`. Input without a numeric prefix yields `NaN` instead of an error.

/// Parse the leading decimal number of `raw` (sign, digits, fraction, exponent).
///
/// `"Infinity"` with an optional sign is accepted. Returns `NaN` if no prefix is a number.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, unsigned) = split_sign(s);

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let len = float_prefix_len(unsigned);
    if len == 0 {
        return f64::NAN;
    }
    unsigned[..len]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

/// Parse the leading base-10 integer of `raw`.
///
/// Returns the value as `f64` (large values lose precision instead of overflowing), or `NaN`
/// if `raw` does not start with digits.
pub fn parse_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, unsigned) = split_sign(s);

    let len = digits_len(unsigned);
    if len == 0 {
        return f64::NAN;
    }
    unsigned[..len]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

fn split_sign(s: &str) -> (f64, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, s)
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let int_digits = digits_len(s);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&s[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_len(&s[exp_start..]);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::{parse_float, parse_int};

    #[test]
    fn parse_float_reads_plain_decimals() {
        assert_eq!(parse_float("9.5"), 9.5);
        assert_eq!(parse_float("-0.25"), -0.25);
        assert_eq!(parse_float("+3"), 3.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("7."), 7.0);
    }

    #[test]
    fn parse_float_reads_leading_prefix_only() {
        assert_eq!(parse_float("  12.5 cm"), 12.5);
        assert_eq!(parse_float("1.5e3kg"), 1500.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("4.2.1"), 4.2);
    }

    #[test]
    fn parse_float_returns_nan_without_numeric_prefix() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("Monarch").is_nan());
    }

    #[test]
    fn parse_float_accepts_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_int_truncates_at_first_non_digit() {
        assert_eq!(parse_int("42"), 42.0);
        assert_eq!(parse_int(" -7 "), -7.0);
        assert_eq!(parse_int("12.9"), 12.0);
        assert!(parse_int("x12").is_nan());
        assert!(parse_int("").is_nan());
    }
}
