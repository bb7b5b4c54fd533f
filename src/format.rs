//! Number formatting for labels, seeded expressions and display.

/// Shortest decimal text that parses back to the same value.
///
/// This is the form used when a result is written into history labels or
/// seeded into a new expression, so it must stay within what the
/// evaluator accepts: plain digits, an optional point and a leading minus.
/// Negative zero is written as `0`.
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Thousands-grouped text with at most three fraction digits.
///
/// ```rust
/// use shopcalc::format::grouped;
///
/// assert_eq!(grouped(1234567.0), "1,234,567");
/// assert_eq!(grouped(1234.56789), "1,234.568");
/// assert_eq!(grouped(-0.5), "-0.5");
/// ```
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_text_keeps_integers_plain() {
        assert_eq!(number_text(110.0), "110");
        assert_eq!(number_text(-5.0), "-5");
    }

    #[test]
    fn number_text_round_trips_fractions() {
        let value = 100.0 * 1.1;
        let text = number_text(value);
        assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn number_text_normalizes_negative_zero() {
        assert_eq!(number_text(-0.0), "0");
    }

    #[test]
    fn number_text_never_uses_exponent() {
        assert!(!number_text(1e21).contains('e'));
        assert!(!number_text(1e-7).contains('e'));
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(1234567.0), "1,234,567");
    }

    #[test]
    fn grouped_limits_fraction_digits() {
        assert_eq!(grouped(110.00000000000001), "110");
        assert_eq!(grouped(0.1 + 0.2), "0.3");
        assert_eq!(grouped(2.5), "2.5");
    }

    #[test]
    fn grouped_handles_negatives() {
        assert_eq!(grouped(-1234.5), "-1,234.5");
        assert_eq!(grouped(-0.0001), "0");
    }
}
