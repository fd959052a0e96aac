//! JSON fetch wrapper
//!
//! No retries or backoff; every failure is logged and handed back to the caller.

use std::collections::HashMap;

use gloo_net::http::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{RequestCache, RequestCredentials, RequestMode};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to build request: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Options accepted from JavaScript, mirroring the `fetch` init object
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// A string (usually `JSON.stringify(..)`) is sent as-is
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub cache: Option<String>,
    /// Init keys with no equivalent here
    #[serde(flatten)]
    pub unsupported: HashMap<String, Value>,
}

/// Text sent on the wire for a request body
///
/// Strings were already encoded by the caller; anything else is encoded once.
pub fn body_text(body: &Value) -> Result<String, RequestError> {
    match body {
        Value::String(text) => Ok(text.clone()),
        other => serde_json::to_string(other).map_err(|e| RequestError::Build(e.to_string())),
    }
}

/// Send a JSON request and decode the JSON response
pub async fn make_request(url: &str, options: RequestOptions) -> Result<Value, RequestError> {
    let result = send(url, options).await;
    if let Err(err) = &result {
        tracing::error!(url, error = %err, "request failed");
    }
    result
}

fn init_enum<T>(key: &str, value: Option<&str>, parse: fn(&JsValue) -> Option<T>) -> Option<T> {
    let value = value?;
    let parsed = parse(&JsValue::from_str(value));
    if parsed.is_none() {
        tracing::warn!(key, value, "ignoring unknown fetch option value");
    }
    parsed
}

async fn send(url: &str, options: RequestOptions) -> Result<Value, RequestError> {
    let method = match options.method.as_deref() {
        Some(method) => Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|e| RequestError::Build(e.to_string()))?,
        None => Method::GET,
    };

    for key in options.unsupported.keys() {
        tracing::warn!(url, key = %key, "ignoring unsupported fetch option");
    }

    let mut builder = RequestBuilder::new(url)
        .method(method)
        .header("Content-Type", "application/json");
    for (name, value) in &options.headers {
        builder = builder.header(name, value);
    }

    let credentials = options.credentials.as_deref();
    if let Some(value) = init_enum("credentials", credentials, RequestCredentials::from_js_value) {
        builder = builder.credentials(value);
    }
    if let Some(value) = init_enum("mode", options.mode.as_deref(), RequestMode::from_js_value) {
        builder = builder.mode(value);
    }
    if let Some(value) = init_enum("cache", options.cache.as_deref(), RequestCache::from_js_value) {
        builder = builder.cache(value);
    }

    let request = match &options.body {
        Some(body) => builder.body(body_text(body)?),
        None => builder.build(),
    }
    .map_err(|e| RequestError::Build(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RequestError::Status(response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_status_message() {
        assert_eq!(RequestError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[wasm_bindgen_test]
    fn test_options_defaults() {
        let options: RequestOptions =
            serde_json::from_str(r#"{"headers":{"X-CSRF-Token":"abc"}}"#).unwrap();
        assert!(options.method.is_none());
        assert_eq!(options.headers.get("X-CSRF-Token").map(String::as_str), Some("abc"));
        assert!(options.body.is_none());
        assert!(options.unsupported.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_stringified_body_is_not_encoded_twice() {
        let options: RequestOptions =
            serde_json::from_str(r#"{"method":"POST","body":"{\"a\":1}"}"#).unwrap();
        let body = options.body.as_ref().unwrap();
        assert_eq!(body_text(body).unwrap(), r#"{"a":1}"#);
    }

    #[wasm_bindgen_test]
    fn test_object_body_is_encoded_once() {
        assert_eq!(body_text(&json!({"symbol": "AAPL"})).unwrap(), r#"{"symbol":"AAPL"}"#);
    }

    #[wasm_bindgen_test]
    fn test_fetch_init_keys() {
        let options: RequestOptions = serde_json::from_str(
            r#"{"credentials":"same-origin","mode":"cors","keepalive":true}"#,
        )
        .unwrap();
        assert_eq!(options.credentials.as_deref(), Some("same-origin"));
        assert_eq!(options.mode.as_deref(), Some("cors"));
        assert_eq!(options.unsupported.get("keepalive"), Some(&json!(true)));

        let credentials = options.credentials.as_deref();
        assert_eq!(
            init_enum("credentials", credentials, RequestCredentials::from_js_value),
            Some(RequestCredentials::SameOrigin)
        );
        assert_eq!(init_enum("mode", Some("bogus"), RequestMode::from_js_value), None);
    }
}
