//! Alerts, flash messages and the loading spinner

use dashboard_validation_core::config::NoticeConfig;
use dashboard_validation_core::Notice;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{body, create_div, document, query_document};

const SPINNER_ID: &str = "loading-spinner";

/// Prepend a notice to the page container and schedule its dismissal
pub fn show_notice(notice: &Notice, config: &NoticeConfig) -> Result<(), JsValue> {
    let alert = create_div(&notice.class_name())?;
    alert.set_text_content(Some(&notice.message));

    let container: Element = match document()?.query_selector(".container")? {
        Some(container) => container,
        None => body()?.into(),
    };
    container.insert_before(&alert, container.first_child().as_ref())?;

    dismiss_later(alert, config, None);
    Ok(())
}

/// Fade out server-rendered `.alert` elements present at load
pub fn init_flash_messages(config: &NoticeConfig) -> Result<(), JsValue> {
    for alert in query_document(".alert")? {
        if let Ok(alert) = alert.dyn_into::<HtmlElement>() {
            dismiss_later(alert, config, Some("translateY(-20px)"));
        }
    }
    Ok(())
}

fn dismiss_later(element: HtmlElement, config: &NoticeConfig, transform: Option<&'static str>) {
    let fade_ms = config.fade_ms;
    Timeout::new(config.dismiss_after_ms, move || {
        let style = element.style();
        let faded = style.set_property("opacity", "0").and_then(|_| match transform {
            Some(transform) => style.set_property("transform", transform),
            None => Ok(()),
        });
        if let Err(err) = faded {
            tracing::warn!(error = ?err, "failed to fade alert");
        }
        Timeout::new(fade_ms, move || element.remove()).forget();
    })
    .forget();
}

/// Append the loading spinner to `parent`, or to the body
pub fn show_loading(parent: Option<Element>) -> Result<(), JsValue> {
    let spinner = create_div("spinner")?;
    spinner.set_id(SPINNER_ID);

    let parent: Element = match parent {
        Some(parent) => parent,
        None => body()?.into(),
    };
    parent.append_child(&spinner)?;
    Ok(())
}

pub fn hide_loading() -> Result<(), JsValue> {
    if let Some(spinner) = document()?.get_element_by_id(SPINNER_ID) {
        spinner.remove();
    }
    Ok(())
}
