//! Form controller: ties field events to validation and presentation

use crate::descriptor::FieldDescriptor;
use crate::notice::Notice;
use crate::presenter::{present, FieldView};
use crate::validator::validate;

pub const FORM_ERRORS_MESSAGE: &str = "Please fix the errors in the form";

/// What to do with a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitVerdict {
    Proceed,
    /// Cancel submission and surface `notice`
    Block {
        invalid_fields: Vec<String>,
        notice: Notice,
    },
}

impl SubmitVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitVerdict::Block { .. })
    }
}

/// Validate a field from its current state and present the outcome
pub fn validate_view<V: FieldView + ?Sized>(view: &V) -> bool {
    let outcome = validate(&FieldDescriptor::from_attributes(view));
    present(view, &outcome);
    outcome.valid
}

/// Blur handler
pub fn on_blur<V: FieldView + ?Sized>(view: &V) -> bool {
    validate_view(view)
}

/// Input handler: only re-validates a field already marked invalid
pub fn on_input<V: FieldView + ?Sized>(view: &V) -> Option<bool> {
    if view.is_marked_invalid() {
        Some(validate_view(view))
    } else {
        None
    }
}

/// Submit handler: validates every field so each shows its own message
pub fn on_submit<V: FieldView>(views: &[V]) -> SubmitVerdict {
    let invalid_fields: Vec<String> = views
        .iter()
        .filter(|view| !validate_view(*view))
        .map(|view| view.name())
        .collect();

    if invalid_fields.is_empty() {
        SubmitVerdict::Proceed
    } else {
        tracing::debug!(?invalid_fields, "blocking form submission");
        SubmitVerdict::Block {
            invalid_fields,
            notice: Notice::danger(FORM_ERRORS_MESSAGE),
        }
    }
}
