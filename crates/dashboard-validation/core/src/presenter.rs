//! Applies validation outcomes to a field's presentation

use crate::descriptor::FieldAttributes;
use crate::outcome::ValidationOutcome;

/// Presentation state toggled on a field after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    Invalid,
}

impl FieldState {
    /// CSS class carried by a field in this state
    pub fn class(&self) -> &'static str {
        match self {
            FieldState::Valid => "is-valid",
            FieldState::Invalid => "is-invalid",
        }
    }

    /// The class to remove when entering this state
    pub fn opposite_class(&self) -> &'static str {
        match self {
            FieldState::Valid => FieldState::Invalid.class(),
            FieldState::Invalid => FieldState::Valid.class(),
        }
    }
}

/// CSS class of the error node inserted next to an invalid field
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// A field that can be read and restyled
pub trait FieldView: FieldAttributes {
    /// Whether the field currently carries the invalid state
    fn is_marked_invalid(&self) -> bool;

    fn set_state(&self, state: FieldState);

    /// Replace any existing error node with one showing `message`
    fn show_error(&self, message: &str);

    fn clear_error(&self);
}

/// Apply an outcome: toggle state and keep at most one error node
pub fn present<V: FieldView + ?Sized>(view: &V, outcome: &ValidationOutcome) {
    if outcome.valid {
        view.set_state(FieldState::Valid);
        view.clear_error();
    } else {
        view.set_state(FieldState::Invalid);
        view.show_error(&outcome.message);
    }
}
