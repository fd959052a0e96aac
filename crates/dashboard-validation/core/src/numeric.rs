//! Numeric validation functions

use once_cell::sync::Lazy;
use regex::Regex;

pub const POSITIVE_NUMBER_MESSAGE: &str = "Must be a positive number";

/// Longest decimal prefix, as read by JavaScript's `parseFloat`
static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("Failed to compile leading number regex")
});

/// Read the number at the start of `value`, ignoring whatever follows
///
/// `"1,000"` reads as 1 and `"3.5 shares"` as 3.5; text with no leading
/// digits yields `None`.
pub fn leading_number(value: &str) -> Option<f64> {
    let matched = LEADING_NUMBER_REGEX.find(value.trim_start())?;
    matched.as_str().parse::<f64>().ok()
}

/// Starts with a finite number strictly greater than zero
pub fn is_positive_number(value: &str) -> bool {
    leading_number(value)
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

pub fn validate_positive_number(value: &str) -> Result<(), String> {
    if is_positive_number(value) {
        Ok(())
    } else {
        Err(POSITIVE_NUMBER_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_numbers() {
        assert!(is_positive_number("3.5"));
        assert!(is_positive_number("1"));
        assert!(is_positive_number("0.0001"));
        assert!(is_positive_number("1e3"));
        assert!(is_positive_number(".5"));
        assert!(is_positive_number("+2"));
    }

    #[test]
    fn test_leading_number_ignores_trailing_text() {
        assert_eq!(leading_number("1,000"), Some(1.0));
        assert_eq!(leading_number("12abc"), Some(12.0));
        assert_eq!(leading_number("3.5 shares"), Some(3.5));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("1.2.3"), Some(1.2));
        assert!(is_positive_number("1,000"));
        assert!(is_positive_number("12abc"));
    }

    #[test]
    fn test_rejected_numbers() {
        assert!(!is_positive_number("-5"));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("0,5"));
        assert!(!is_positive_number("abc"));
        assert!(!is_positive_number("$12"));
        assert!(!is_positive_number("."));
        assert!(!is_positive_number("inf"));
        assert!(!is_positive_number("Infinity"));
        assert!(!is_positive_number("NaN"));
        assert!(!is_positive_number("1e999"));
        assert!(!is_positive_number(""));
    }
}
