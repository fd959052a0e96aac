//! Password strength validation

use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters counted as "special" in the strength report
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Individual strength checks for a password
///
/// `has_special` is reported for display but does not gate validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    pub length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordReport {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.length && self.has_uppercase && self.has_lowercase && self.has_digit
    }

    /// Unmet requirements in display order
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.length, "at least 8 characters"),
            (self.has_uppercase, "one uppercase letter"),
            (self.has_lowercase, "one lowercase letter"),
            (self.has_digit, "one number"),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, requirement)| requirement)
        .collect()
    }
}

/// Password rule: `Err` lists every missing requirement
pub fn validate_password(password: &str) -> Result<(), String> {
    let report = PasswordReport::check(password);
    if report.is_valid() {
        Ok(())
    } else {
        Err(format!("Password must contain {}", report.missing().join(", ")))
    }
}
