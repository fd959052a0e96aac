//! Field validator entry point

use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::outcome::ValidationOutcome;
use crate::rules::first_applicable;

/// Validate one field against the first rule that applies to it
///
/// Hidden and disabled fields always pass. The value is trimmed once and
/// every rule sees the trimmed value. Never panics and keeps no state
/// between calls.
pub fn validate(field: &FieldDescriptor) -> ValidationOutcome {
    if field.kind == FieldKind::Hidden || field.disabled {
        return ValidationOutcome::valid();
    }

    let value = field.trimmed();
    let Some(rule) = first_applicable(field, value) else {
        return ValidationOutcome::valid();
    };

    let outcome = ValidationOutcome::from_result(rule.run(field, value));
    if !outcome.valid {
        tracing::debug!(
            field = %field.name,
            rule = rule.name,
            message = %outcome.message,
            "field failed validation"
        );
    }
    outcome
}

/// Validate every field, returning outcomes in input order
pub fn validate_all<'a, I>(fields: I) -> Vec<ValidationOutcome>
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    fields.into_iter().map(validate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_and_disabled_short_circuit() {
        let hidden = FieldDescriptor::new("csrf", FieldKind::Hidden, "").required();
        assert!(validate(&hidden).valid);

        let disabled = FieldDescriptor::named("symbol", "TOOLONG").disabled();
        assert!(validate(&disabled).valid);
    }

    #[test]
    fn test_required_message() {
        let field = FieldDescriptor::named("notes", "   ").required();
        let outcome = validate(&field);
        assert!(!outcome.valid);
        assert_eq!(outcome.message, "This field is required");
    }

    #[test]
    fn test_value_is_trimmed() {
        let field = FieldDescriptor::named("totp", " 123456 ");
        assert!(validate(&field).valid);
    }

    #[test]
    fn test_validate_all_keeps_order() {
        let fields = vec![
            FieldDescriptor::named("totp", "12a456"),
            FieldDescriptor::named("totp", "123456"),
        ];
        let outcomes = validate_all(&fields);
        assert!(!outcomes[0].valid);
        assert!(outcomes[1].valid);
    }
}
