//! DOM access: element lookup, event wiring, and fields backed by form controls

use dashboard_validation_core::presenter::ERROR_MESSAGE_CLASS;
use dashboard_validation_core::{FieldAttributes, FieldState, FieldView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document is not available"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Elements under `root` matching `selector`, in document order
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect_elements(root.query_selector_all(selector)?)
}

pub(crate) fn query_document(selector: &str) -> Result<Vec<Element>, JsValue> {
    collect_elements(document()?.query_selector_all(selector)?)
}

fn collect_elements(list: web_sys::NodeList) -> Result<Vec<Element>, JsValue> {
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Create a `<div>` with the given class
pub(crate) fn create_div(class_name: &str) -> Result<HtmlElement, JsValue> {
    let div = document()?
        .create_element("div")?
        .unchecked_into::<HtmlElement>();
    div.set_class_name(class_name);
    Ok(div)
}

/// Attach a listener for the lifetime of the page
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[derive(Debug, Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

/// A form control exposed to the validator and presenter
#[derive(Debug, Clone)]
pub struct DomField {
    element: Element,
    control: Control,
}

impl DomField {
    /// Wrap an `input`, `textarea` or `select`; other elements yield `None`
    pub fn from_element(element: Element) -> Option<Self> {
        let control = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Control::Input(input.clone())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Control::TextArea(area.clone())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Control::Select(select.clone())
        } else {
            return None;
        };

        Some(Self { element, control })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn set_value(&self, value: &str) {
        match &self.control {
            Control::Input(input) => input.set_value(value),
            Control::TextArea(area) => area.set_value(value),
            Control::Select(select) => select.set_value(value),
        }
    }

    fn existing_error(&self) -> Option<Element> {
        let parent = self.element.parent_element()?;
        parent
            .query_selector(&format!(".{}", ERROR_MESSAGE_CLASS))
            .ok()
            .flatten()
    }
}

impl FieldAttributes for DomField {
    fn input_type(&self) -> String {
        match &self.control {
            Control::Input(input) => input.type_(),
            Control::TextArea(_) => "textarea".to_string(),
            Control::Select(select) => select.type_(),
        }
    }

    fn name(&self) -> String {
        self.element.get_attribute("name").unwrap_or_default()
    }

    fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::TextArea(area) => area.value(),
            Control::Select(select) => select.value(),
        }
    }

    fn is_disabled(&self) -> bool {
        match &self.control {
            Control::Input(input) => input.disabled(),
            Control::TextArea(area) => area.disabled(),
            Control::Select(select) => select.disabled(),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.element.has_attribute(name)
    }
}

impl FieldView for DomField {
    fn is_marked_invalid(&self) -> bool {
        self.element
            .class_list()
            .contains(FieldState::Invalid.class())
    }

    fn set_state(&self, state: FieldState) {
        let classes = self.element.class_list();
        let result = classes
            .remove_1(state.opposite_class())
            .and_then(|_| classes.add_1(state.class()));
        if let Err(err) = result {
            tracing::warn!(field = %self.name(), error = ?err, "failed to update field state");
        }
    }

    fn show_error(&self, message: &str) {
        self.clear_error();

        let Some(parent) = self.element.parent_element() else {
            return;
        };
        let result = create_div(ERROR_MESSAGE_CLASS).and_then(|div| {
            div.set_text_content(Some(message));
            parent.append_child(&div).map(|_| ())
        });
        if let Err(err) = result {
            tracing::warn!(field = %self.name(), error = ?err, "failed to show error message");
        }
    }

    fn clear_error(&self) {
        if let Some(existing) = self.existing_error() {
            existing.remove();
        }
    }
}
