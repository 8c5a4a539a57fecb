// Locale-tolerant amount parsing. Amounts are integer cents end to end so
// equality checks and duplicate merging stay exact.

/// Parse a locale-formatted amount string into cents.
///
/// Whitespace anywhere in the string is ignored (thousands grouping as in
/// `"1 234,56"`, including NBSP from spreadsheet copies). The decimal
/// separator is a comma or a dot, at most one, with up to two fraction
/// digits. An optional leading `+`/`-` is accepted. Empty or
/// whitespace-only input parses to 0.
///
/// Returns `None` for anything else: stray characters, a second separator,
/// more than two fraction digits, or values that overflow `i64` cents.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Some(0);
    }

    let mut body = cleaned.as_str();
    let negative = match body.as_bytes().first() {
        Some(b'-') => {
            body = &body[1..];
            true
        }
        Some(b'+') => {
            body = &body[1..];
            false
        }
        _ => false,
    };

    // First comma or dot splits integer and fraction parts.
    let (int_part, frac_part) = match body.find([',', '.']) {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac_part.len() > 2 || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let frac: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().ok()? * 10,
        _ => frac_part.parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(frac)?;
    Some(if negative { -cents } else { cents })
}

/// Render cents as a canonical dot-decimal string: `-7` is `"-0.07"`,
/// `123450` is `"1234.50"`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_comma_decimal() {
        assert_eq!(parse_amount("1 234,56"), Some(123_456));
        assert_eq!(parse_amount("12 345 678,90"), Some(1_234_567_890));
    }

    #[test]
    fn parses_nbsp_grouping() {
        // Spreadsheet copies group thousands with NBSP / narrow NBSP.
        assert_eq!(parse_amount("1\u{a0}234,56"), Some(123_456));
        assert_eq!(parse_amount("1\u{202f}234"), Some(123_400));
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(parse_amount(""), Some(0));
        assert_eq!(parse_amount("   "), Some(0));
        assert_eq!(parse_amount("\t"), Some(0));
    }

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_amount("100"), Some(10_000));
        assert_eq!(parse_amount("0"), Some(0));
    }

    #[test]
    fn parses_dot_decimal() {
        assert_eq!(parse_amount("1234.56"), Some(123_456));
        assert_eq!(parse_amount("0.07"), Some(7));
    }

    #[test]
    fn pads_short_fractions() {
        assert_eq!(parse_amount("5,5"), Some(550));
        assert_eq!(parse_amount("5,"), Some(500));
        assert_eq!(parse_amount(",5"), Some(50));
    }

    #[test]
    fn parses_signs() {
        assert_eq!(parse_amount("-1 000,00"), Some(-100_000));
        assert_eq!(parse_amount("+250"), Some(25_000));
        assert_eq!(parse_amount("-0,00"), Some(0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("+"), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("1e5"), None);
    }

    #[test]
    fn rejects_second_separator() {
        assert_eq!(parse_amount("12,34,56"), None);
        assert_eq!(parse_amount("1.234,56"), None);
    }

    #[test]
    fn rejects_long_fractions() {
        // Sub-cent precision is refused rather than rounded.
        assert_eq!(parse_amount("1,005"), None);
        assert_eq!(parse_amount("0.001"), None);
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_amount("99999999999999999999"), None);
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(-7), "-0.07");
        assert_eq!(format_amount(123_450), "1234.50");
        assert_eq!(format_amount(-100_000), "-1000.00");
    }

    #[test]
    fn format_parse_roundtrip() {
        for cents in [0, 1, -1, 99, -99, 100, 123_456, -987_654_321] {
            assert_eq!(parse_amount(&format_amount(cents)), Some(cents));
        }
    }
}
