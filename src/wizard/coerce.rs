//! Raw input coercion
//!
//! Text typed into a form field is never rejected. Numeric fields take the
//! longest numeric prefix of the input and fall back to zero; flags accept the
//! usual yes/no spellings.

use crate::models::{FieldKind, FieldValue};

/// Convert raw text into a value of `kind`
pub fn parse_input(kind: FieldKind, raw: &str) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(raw.to_string()),
        FieldKind::Number => FieldValue::Number(parse_number(raw)),
        FieldKind::Integer => FieldValue::Integer(parse_integer(raw)),
        FieldKind::Flag => FieldValue::Flag(parse_flag(raw)),
    }
}

/// Parse a non-negative decimal from the start of `raw`; anything else is 0
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || &s[digits_start..end] == "." {
        return 0.0;
    }

    match s[..end].parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

/// Parse a non-negative integer from the start of `raw`; anything else is 0
pub fn parse_integer(raw: &str) -> u32 {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().map(clamp_u64).unwrap_or(u32::MAX)
}

/// Truncate a float into the integer range, clamping negatives to zero
pub fn clamp_integer(n: f64) -> u32 {
    if !n.is_finite() || n <= 0.0 {
        0
    } else if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n.trunc() as u32
    }
}

fn clamp_u64(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Interpret a yes/no style answer
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "on" | "x"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("7.5"), 7.5);
        assert_eq!(parse_number("  8"), 8.0);
        assert_eq!(parse_number("6.5 band"), 6.5);
        assert_eq!(parse_number(".5"), 0.5);
    }

    #[test]
    fn test_parse_number_invalid_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("-3"), 0.0);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("1450"), 1450);
        assert_eq!(parse_integer("320 points"), 320);
        assert_eq!(parse_integer("-5"), 0);
        assert_eq!(parse_integer("n/a"), 0);
        assert_eq!(parse_integer("99999999999"), u32::MAX);
    }

    #[test]
    fn test_clamp_integer() {
        assert_eq!(clamp_integer(2025.9), 2025);
        assert_eq!(clamp_integer(-1.0), 0);
        assert_eq!(clamp_integer(f64::NAN), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("Yes"));
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag("maybe"));
    }

    #[test]
    fn test_parse_input_dispatches_on_kind() {
        assert_eq!(parse_input(FieldKind::Text, " Lahore"), FieldValue::Text(" Lahore".into()));
        assert_eq!(parse_input(FieldKind::Integer, "2026"), FieldValue::Integer(2026));
        assert_eq!(parse_input(FieldKind::Flag, "no"), FieldValue::Flag(false));
    }
}
