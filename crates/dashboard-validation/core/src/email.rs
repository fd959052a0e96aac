//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Something@something.something, no whitespace and a single '@' per part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Validates basic email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email rule: `Err` carries the user-facing message
pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        // Loose on purpose: anything non-blank on each side of the dot
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
    }

    #[test]
    fn test_validate_email_message() {
        assert_eq!(validate_email("a@b").unwrap_err(), EMAIL_MESSAGE);
        assert!(validate_email("a@b.com").is_ok());
    }
}
