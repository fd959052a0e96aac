//! In-memory field for exercising the controller without a DOM

use std::cell::RefCell;
use std::collections::HashMap;

use crate::descriptor::FieldAttributes;
use crate::presenter::{FieldState, FieldView};

/// A field held entirely in memory
///
/// Tracks presentation state and the error nodes a browser would show.
#[derive(Debug, Default)]
pub struct MemoryField {
    input_type: String,
    name: String,
    value: RefCell<String>,
    disabled: bool,
    attributes: HashMap<String, String>,
    state: RefCell<Option<FieldState>>,
    errors: RefCell<Vec<String>>,
}

impl MemoryField {
    pub fn new(input_type: &str, name: &str, value: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            name: name.to_string(),
            value: RefCell::new(value.to_string()),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    pub fn state(&self) -> Option<FieldState> {
        *self.state.borrow()
    }

    /// Error messages currently shown next to the field
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl FieldAttributes for MemoryField {
    fn input_type(&self) -> String {
        self.input_type.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

impl FieldView for MemoryField {
    fn is_marked_invalid(&self) -> bool {
        self.state() == Some(FieldState::Invalid)
    }

    fn set_state(&self, state: FieldState) {
        *self.state.borrow_mut() = Some(state);
    }

    fn show_error(&self, message: &str) {
        let mut errors = self.errors.borrow_mut();
        errors.clear();
        errors.push(message.to_string());
    }

    fn clear_error(&self) {
        self.errors.borrow_mut().clear();
    }
}
