//! String validation functions

use fancy_regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const PATTERN_MESSAGE: &str = "Invalid format";

/// A value is present when it is non-blank after trimming
pub fn is_required_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates minimum length (in characters)
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be less than {} characters", max))
    }
}

/// Regex pattern matching, unanchored like `RegExp.test`
///
/// Patterns come from page markup, so lookaround and backreferences are
/// accepted. An invalid pattern never matches.
pub fn matches_regex(value: &str, pattern: &str) -> bool {
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => {
            tracing::warn!(pattern, error = %err, "invalid field pattern");
            return false;
        }
    };

    regex.is_match(value).unwrap_or_else(|err| {
        tracing::warn!(pattern, error = %err, "field pattern failed to run");
        false
    })
}

/// Pattern rule: `title` overrides the default message
pub fn validate_pattern(value: &str, pattern: &str, title: Option<&str>) -> Result<(), String> {
    if matches_regex(value, pattern) {
        Ok(())
    } else {
        Err(title.unwrap_or(PATTERN_MESSAGE).to_string())
    }
}
