//! Wires dashboard forms to the validator

use dashboard_validation_core::config::{FormsConfig, NoticeConfig};
use dashboard_validation_core::{
    on_blur, on_input, on_submit, sanitize_input, FieldAttributes, SubmitVerdict,
};
use wasm_bindgen::prelude::*;

use crate::dom::{listen, query_all, query_document, DomField};
use crate::notice::show_notice;

const FIELD_SELECTOR: &str = "input, textarea, select";
const SANITIZED_SELECTOR: &str = "input[type=\"text\"], input[type=\"email\"], textarea";

/// Validate opted-in forms on blur, on input while invalid, and on submit
pub fn init_form_validation(forms: &FormsConfig, notices: &NoticeConfig) -> Result<(), JsValue> {
    let mut wired = 0usize;

    for form in query_document(&forms.selector)? {
        let fields: Vec<DomField> = query_all(&form, FIELD_SELECTOR)?
            .into_iter()
            .filter_map(DomField::from_element)
            .collect();

        for field in &fields {
            let target = field.element().clone();

            let blurred = field.clone();
            listen(&target, "blur", move |_| {
                on_blur(&blurred);
            })?;

            let edited = field.clone();
            listen(&target, "input", move |_| {
                on_input(&edited);
            })?;
        }

        let notices = notices.clone();
        listen(&form, "submit", move |event| {
            if let SubmitVerdict::Block { notice, .. } = on_submit(&fields) {
                event.prevent_default();
                if let Err(err) = show_notice(&notice, &notices) {
                    tracing::warn!(error = ?err, "failed to show form notice");
                }
            }
        })?;

        wired += 1;
    }

    tracing::debug!(forms = wired, "form validation wired");
    Ok(())
}

/// HTML-escape free-text inputs of every form on submit
pub fn init_input_sanitization() -> Result<(), JsValue> {
    for form in query_document("form")? {
        let target = form.clone();
        listen(&target, "submit", move |_| {
            let Ok(elements) = query_all(&form, SANITIZED_SELECTOR) else {
                return;
            };
            for field in elements.into_iter().filter_map(DomField::from_element) {
                field.set_value(&sanitize_input(&field.value()));
            }
        })?;
    }
    Ok(())
}
