//! Dismissible notices shown at the top of the page

use serde::{Deserialize, Serialize};

/// Alert flavour, rendered as the `alert-{level}` class
///
/// Names other than the four built-in ones are kept verbatim, so pages can
/// use any alert class their stylesheet defines (`primary`, `error`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Custom(String),
}

impl NoticeLevel {
    pub fn as_str(&self) -> &str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
            NoticeLevel::Custom(name) => name,
        }
    }

    /// Parse a level name; a blank name means `Info`
    pub fn parse(level: &str) -> Self {
        match level.trim() {
            "" | "info" => NoticeLevel::Info,
            "success" => NoticeLevel::Success,
            "warning" => NoticeLevel::Warning,
            "danger" => NoticeLevel::Danger,
            other => NoticeLevel::Custom(other.to_string()),
        }
    }
}

impl From<String> for NoticeLevel {
    fn from(level: String) -> Self {
        NoticeLevel::parse(&level)
    }
}

impl From<NoticeLevel> for String {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// A transient alert banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    #[serde(default)]
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Danger)
    }

    /// Class attribute for the rendered alert element
    pub fn class_name(&self) -> String {
        format!("alert alert-{} fade-in", self.level.as_str())
    }
}
