//! Page-level helpers: clock, auto-refresh, anchors, feature boxes, role picker

use dashboard_validation_core::config::{ClockConfig, RefreshConfig};
use dashboard_validation_core::format_date_time;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{document, listen, query_document, window};

/// Write the current local date and time into the clock element
pub fn update_date_time(element_id: &str) -> Result<(), JsValue> {
    if let Some(element) = document()?.get_element_by_id(element_id) {
        let now = chrono::Local::now().naive_local();
        element.set_text_content(Some(&format_date_time(&now)));
    }
    Ok(())
}

/// Render the clock now and on every tick
pub fn start_clock(config: &ClockConfig) -> Result<(), JsValue> {
    if !config.enabled {
        return Ok(());
    }

    update_date_time(&config.element_id)?;
    let element_id = config.element_id.clone();
    Interval::new(config.interval_ms, move || {
        if let Err(err) = update_date_time(&element_id) {
            tracing::warn!(error = ?err, "failed to update clock");
        }
    })
    .forget();
    Ok(())
}

/// Reload the page once the refresh interval elapses
pub fn schedule_refresh(config: &RefreshConfig) -> Result<(), JsValue> {
    if !config.enabled {
        return Ok(());
    }

    let location = window()?.location();
    Timeout::new(config.interval_ms, move || {
        if let Err(err) = location.reload() {
            tracing::error!(error = ?err, "failed to reload page");
        }
    })
    .forget();
    Ok(())
}

/// Selector for an in-page anchor, `None` for the bare `#`
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

pub fn init_smooth_scrolling() -> Result<(), JsValue> {
    for anchor in query_document("a[href^=\"#\"]")? {
        let target = anchor.clone();
        listen(&target, "click", move |event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();

            // Ids that are not valid selectors simply do not scroll
            let destination = document()
                .and_then(|doc| doc.query_selector(selector))
                .ok()
                .flatten();
            if let Some(destination) = destination {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                destination.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

/// Make `.feature-box[data-href]` elements navigate on click
pub fn init_feature_boxes() -> Result<(), JsValue> {
    for feature in query_document(".feature-box[data-href]")? {
        if let Some(styled) = feature.dyn_ref::<HtmlElement>() {
            styled.style().set_property("cursor", "pointer")?;
        }

        let target = feature.clone();
        listen(&target, "click", move |_| {
            let Some(href) = feature.get_attribute("data-href").filter(|h| !h.is_empty()) else {
                return;
            };
            if let Err(err) = window().and_then(|w| w.location().set_href(&href)) {
                tracing::error!(href = %href, error = ?err, "failed to navigate");
            }
        })?;
    }
    Ok(())
}

/// Exactly one `.role-option` is selected; clicking one checks its radio
pub fn init_role_selector() -> Result<(), JsValue> {
    let options = query_document(".role-option")?;

    for option in &options {
        let all = options.clone();
        let clicked = option.clone();
        listen(option, "click", move |_| {
            for other in &all {
                if let Err(err) = other.class_list().remove_1("selected") {
                    tracing::warn!(error = ?err, "failed to clear role selection");
                }
            }
            if let Err(err) = clicked.class_list().add_1("selected") {
                tracing::warn!(error = ?err, "failed to select role");
            }

            let radio = clicked
                .query_selector("input[type=\"radio\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
            if let Some(radio) = radio {
                radio.set_checked(true);
            }
        })?;
    }
    Ok(())
}

/// Add the fade-in animation to the main content wrapper
pub fn fade_in_main_content() -> Result<(), JsValue> {
    if let Some(main) = document()?.query_selector(".container, .page-wrapper")? {
        main.class_list().add_1("fade-in")?;
    }
    Ok(())
}
