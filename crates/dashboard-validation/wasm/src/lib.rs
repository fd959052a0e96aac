//! Dashboard Validation WASM
//!
//! WebAssembly bindings for the dashboard: wires validation into forms,
//! shows alerts and spinners, and drives the page helpers. Exposes the
//! validators to JavaScript using the same logic as the native core.

use std::cell::RefCell;

use dashboard_validation_core as core;
use dashboard_validation_core::storage::{load_json, remove, save_json};
use dashboard_validation_core::{DashboardConfig, FieldDescriptor, Notice, NoticeLevel};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub mod dom;
pub mod form;
pub mod logging;
pub mod notice;
pub mod page;
pub mod request;
pub mod storage;

pub use dom::DomField;
pub use request::{RequestError, RequestOptions};
pub use storage::LocalStorage;

thread_local! {
    static CONFIG: RefCell<DashboardConfig> = RefCell::new(DashboardConfig::default());
}

fn current_config() -> DashboardConfig {
    CONFIG.with(|config| config.borrow().clone())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Initialize every dashboard behaviour
///
/// `config` is an optional object shaped like `DashboardConfig`
/// (camelCase keys); missing keys take their defaults.
///
/// # Example (JavaScript)
/// ```javascript
/// document.addEventListener('DOMContentLoaded', () => {
///     initDashboard({ refresh: { enabled: true } });
/// });
/// ```
#[wasm_bindgen(js_name = initDashboard)]
pub fn init_dashboard(config: JsValue) -> Result<(), JsValue> {
    logging::init(tracing::Level::INFO);

    let config: DashboardConfig = if config.is_undefined() || config.is_null() {
        DashboardConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    CONFIG.with(|current| *current.borrow_mut() = config.clone());

    page::start_clock(&config.clock)?;
    form::init_form_validation(&config.forms, &config.notice)?;
    page::init_smooth_scrolling()?;
    notice::init_flash_messages(&config.notice)?;
    page::init_feature_boxes()?;
    page::init_role_selector()?;
    if config.forms.sanitize_on_submit {
        form::init_input_sanitization()?;
    }
    page::fade_in_main_content()?;
    page::schedule_refresh(&config.refresh)?;

    tracing::info!("Financial Services Dashboard initialized");
    Ok(())
}

/// Validate a single field descriptor
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, message } = validateField({
///     name: 'symbol',
///     kind: 'symbol',
///     value: 'aapl',
///     constraints: { required: true },
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(descriptor: JsValue) -> Result<JsValue, JsValue> {
    let field: FieldDescriptor = serde_wasm_bindgen::from_value(descriptor)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse field: {}", e)))?;
    to_js(&core::validate(&field))
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Password strength report (`isValid`, `length`, `hasUppercase`, ...)
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str) -> Result<JsValue, JsValue> {
    let report = core::PasswordReport::check(password);
    to_js(&PasswordSummary {
        is_valid: report.is_valid(),
        report,
    })
}

#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username_js(username: &str) -> Result<JsValue, JsValue> {
    let report = core::UsernameReport::check(username);
    to_js(&UsernameSummary {
        is_valid: report.is_valid(),
        report,
    })
}

#[wasm_bindgen(js_name = validateTOTP)]
pub fn validate_totp_js(code: &str) -> bool {
    core::is_valid_totp(code)
}

#[wasm_bindgen(js_name = validateStockSymbol)]
pub fn validate_stock_symbol_js(symbol: &str) -> bool {
    core::is_valid_stock_symbol(symbol)
}

#[wasm_bindgen(js_name = validatePositiveNumber)]
pub fn validate_positive_number_js(value: &str) -> bool {
    core::is_positive_number(value)
}

#[wasm_bindgen(js_name = validateRequired)]
pub fn validate_required_js(value: &str) -> bool {
    core::is_required_present(value)
}

#[wasm_bindgen(js_name = sanitizeInput)]
pub fn sanitize_input_js(input: &str) -> String {
    core::sanitize_input(input)
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: f64, currency: Option<String>) -> String {
    core::format_currency(amount, currency.as_deref().unwrap_or("USD"))
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(num: f64) -> String {
    core::format_number(num)
}

#[wasm_bindgen(js_name = updateDateTime)]
pub fn update_date_time_js() -> Result<(), JsValue> {
    page::update_date_time(&current_config().clock.element_id)
}

/// Show a dismissible alert; `level` is the `alert-*` class suffix, `info` by default
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: &str, level: Option<String>) -> Result<(), JsValue> {
    let level = level.as_deref().map(NoticeLevel::parse).unwrap_or_default();
    notice::show_notice(&Notice::new(message, level), &current_config().notice)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Option<Element>) -> Result<(), JsValue> {
    notice::show_loading(element)
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() -> Result<(), JsValue> {
    notice::hide_loading()
}

#[wasm_bindgen(js_name = saveToLocalStorage)]
pub fn save_to_local_storage(key: &str, value: JsValue) -> bool {
    let value: serde_json::Value = match serde_wasm_bindgen::from_value(value) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(key, error = %err, "error saving to localStorage");
            return false;
        }
    };

    match LocalStorage::open() {
        Ok(storage) => save_json(&storage, key, &value),
        Err(err) => {
            tracing::error!(key, error = %err, "error saving to localStorage");
            false
        }
    }
}

/// Stored value, or `null` when missing or unreadable
#[wasm_bindgen(js_name = loadFromLocalStorage)]
pub fn load_from_local_storage(key: &str) -> JsValue {
    let value = match LocalStorage::open() {
        Ok(storage) => load_json::<_, serde_json::Value>(&storage, key),
        Err(err) => {
            tracing::error!(key, error = %err, "error loading from localStorage");
            None
        }
    };

    value
        .and_then(|value| to_js(&value).ok())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = removeFromLocalStorage)]
pub fn remove_from_local_storage(key: &str) -> bool {
    match LocalStorage::open() {
        Ok(storage) => remove(&storage, key),
        Err(err) => {
            tracing::error!(key, error = %err, "error removing from localStorage");
            false
        }
    }
}

/// Send a JSON request; rejects with `Error("HTTP error! status: N")` on non-2xx
#[wasm_bindgen(js_name = makeRequest)]
pub async fn make_request_js(url: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options: RequestOptions = if options.is_undefined() || options.is_null() {
        RequestOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| js_sys::Error::new(&format!("Failed to parse options: {}", e)))?
    };

    let body = request::make_request(&url, options)
        .await
        .map_err(|e| js_sys::Error::new(&e.to_string()))?;
    to_js(&body)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSummary {
    is_valid: bool,
    #[serde(flatten)]
    report: core::PasswordReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernameSummary {
    is_valid: bool,
    #[serde(flatten)]
    report: core::UsernameReport,
}
