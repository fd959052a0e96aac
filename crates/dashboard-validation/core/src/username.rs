//! Username validation

use serde::Serialize;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameReport {
    pub min_length: bool,
    pub max_length: bool,
    pub valid_chars: bool,
}

impl UsernameReport {
    pub fn check(username: &str) -> Self {
        let len = username.chars().count();
        Self {
            min_length: len >= USERNAME_MIN,
            max_length: len <= USERNAME_MAX,
            valid_chars: !username.is_empty() && username.chars().all(is_username_char),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_length && self.max_length && self.valid_chars
    }
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '.' | '-')
}

/// Username rule: reports the first failing condition
pub fn validate_username(username: &str) -> Result<(), String> {
    let report = UsernameReport::check(username);
    if !report.min_length {
        Err(format!("Username must be at least {} characters", USERNAME_MIN))
    } else if !report.max_length {
        Err(format!("Username must be less than {} characters", USERNAME_MAX))
    } else if !report.valid_chars {
        Err("Username can only contain letters, numbers, and @.-_".to_string())
    } else {
        Ok(())
    }
}
