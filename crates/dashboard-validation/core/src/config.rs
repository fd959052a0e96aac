// File: src/config.rs
// Purpose: Dashboard behaviour settings, from TOML or a JS object

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    #[serde(default)]
    pub notice: NoticeConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

/// Alert timing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoticeConfig {
    /// Time before an alert starts fading out (default: 5000)
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u32,

    /// Fade duration before the alert is removed (default: 300)
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
}

/// Live clock in the page header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClockConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_clock_interval_ms")]
    pub interval_ms: u32,

    #[serde(default = "default_clock_element_id")]
    pub element_id: String,
}

/// Periodic page reload (portfolio prices)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshConfig {
    #[serde(default = "default_false")]
    pub enabled: bool,

    #[serde(default = "default_refresh_interval_ms")]
    pub interval_ms: u32,
}

/// Form wiring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormsConfig {
    /// Forms opted into validation (default: "form[data-validate]")
    #[serde(default = "default_form_selector")]
    pub selector: String,

    /// HTML-escape text inputs on every submit
    #[serde(default = "default_true")]
    pub sanitize_on_submit: bool,
}

// Default values
fn default_dismiss_after_ms() -> u32 {
    5000
}

fn default_fade_ms() -> u32 {
    300
}

fn default_clock_interval_ms() -> u32 {
    1000
}

fn default_clock_element_id() -> String {
    "current-date-time".to_string()
}

fn default_refresh_interval_ms() -> u32 {
    10_000
}

fn default_form_selector() -> String {
    "form[data-validate]".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_clock_interval_ms(),
            element_id: default_clock_element_id(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: default_refresh_interval_ms(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            selector: default_form_selector(),
            sanitize_on_submit: true,
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse dashboard config")
    }

    /// Load configuration from a TOML file, defaulting when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }
}
