//! Validation outcome returned for every field

use serde::{Deserialize, Serialize};

/// Pass/fail result with a user-facing message (empty when valid)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Convert a validator result, mapping `Err(msg)` to an invalid outcome
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}
