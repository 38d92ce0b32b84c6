//! Cell-value coercion helpers.
//!
//! The export is full of free text where numbers should be; anything that
//! does not parse is treated as absent, never as an error, so malformed
//! answers flow into validation instead of aborting the batch.

/// True for empty or whitespace-only cells.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_handles_blanks_and_garbage() {
        assert_eq!(parse_f64("  72000000 "), Some(72_000_000.0));
        assert_eq!(parse_f64("3.5"), Some(3.5));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("diez millones"), None);
    }

    #[test]
    fn parse_i64_rejects_decimals() {
        assert_eq!(parse_i64("12"), Some(12));
        assert_eq!(parse_i64("12.5"), None);
    }

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(5_000_000.0), "5000000");
        assert_eq!(format_numeric(10.5), "10.5");
        assert_eq!(format_numeric(0.0), "0");
    }
}
