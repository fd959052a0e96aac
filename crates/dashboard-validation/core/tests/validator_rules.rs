//! End-to-end checks of the rule cascade through the public `validate` API

use dashboard_validation_core::{
    on_submit, validate, FieldDescriptor, FieldKind, SubmitVerdict, ValidationOutcome,
};
use dashboard_validation_core::testing::MemoryField;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn invalid(message: &str) -> ValidationOutcome {
    ValidationOutcome::invalid(message)
}

#[rstest]
#[case(
    FieldDescriptor::new("email", FieldKind::Email, "a@b"),
    invalid("Please enter a valid email address")
)]
#[case(FieldDescriptor::new("email", FieldKind::Email, "a@b.com"), ValidationOutcome::valid())]
#[case(FieldDescriptor::named("totp", "12a456"), invalid("TOTP code must be 6 digits"))]
#[case(FieldDescriptor::named("totp", "123456"), ValidationOutcome::valid())]
#[case(FieldDescriptor::named("symbol", "aapl"), ValidationOutcome::valid())]
#[case(
    FieldDescriptor::named("symbol", "TOOLONG"),
    invalid("Stock symbol must be 1-5 uppercase letters")
)]
#[case(FieldDescriptor::named("quantity", "-5"), invalid("Must be a positive number"))]
#[case(FieldDescriptor::named("quantity", "3.5"), ValidationOutcome::valid())]
#[case(FieldDescriptor::named("quantity", "1,000"), ValidationOutcome::valid())]
#[case(FieldDescriptor::named("quantity", "3.5 shares"), ValidationOutcome::valid())]
#[case(FieldDescriptor::named("quantity", "shares"), invalid("Must be a positive number"))]
#[case(FieldDescriptor::named("avg_cost", "0"), invalid("Must be a positive number"))]
#[case(
    FieldDescriptor::named("username", "ab"),
    invalid("Username must be at least 3 characters")
)]
#[case(
    FieldDescriptor::new("password", FieldKind::Password, "weakpass"),
    invalid("Password must contain one uppercase letter, one number")
)]
fn test_rule_outcomes(#[case] field: FieldDescriptor, #[case] expected: ValidationOutcome) {
    assert_eq!(validate(&field), expected);
}

#[rstest]
#[case::min_length(
    FieldDescriptor::named("notes", "ab").with_min_length(3),
    "Must be at least 3 characters"
)]
#[case::max_length(
    FieldDescriptor::named("notes", "abcd").with_max_length(3),
    "Must be less than 3 characters"
)]
#[case::pattern_default(
    FieldDescriptor::named("code", "ab-1").with_pattern("^[a-z]+$", None),
    "Invalid format"
)]
#[case::pattern_title(
    FieldDescriptor::named("code", "ab-1")
        .with_pattern("^[a-z]+$", Some("Letters only".to_string())),
    "Letters only"
)]
#[case::lookahead_unmet(
    FieldDescriptor::named("code", "abcd").with_pattern(r"^(?=.*\d)[a-z\d]+$", None),
    "Invalid format"
)]
fn test_constraint_messages(#[case] field: FieldDescriptor, #[case] message: &str) {
    assert_eq!(validate(&field), invalid(message));
}

#[rstest]
#[case::lookahead(FieldDescriptor::named("code", "abc1").with_pattern(r"^(?=.*\d)[a-z\d]+$", None))]
#[case::backreference(FieldDescriptor::named("code", "aa").with_pattern(r"^(a)\1$", None))]
#[case::negative_lookahead(
    FieldDescriptor::named("ticker", "AAPL").with_pattern(r"^(?!CASH)[A-Z]+$", None)
)]
fn test_browser_patterns_accepted(#[case] field: FieldDescriptor) {
    assert_eq!(validate(&field), ValidationOutcome::valid());
}

#[test]
fn test_kind_rule_shadows_constraints() {
    // A valid symbol passes even when it breaks a declared minlength
    let field = FieldDescriptor::named("symbol", "F").with_min_length(2);
    assert!(validate(&field).valid);

    // Email rule wins over pattern
    let field = FieldDescriptor::new("email", FieldKind::Email, "a@b.com")
        .with_pattern("^z", None);
    assert!(validate(&field).valid);
}

#[test]
fn test_required_precedes_everything() {
    let field = FieldDescriptor::new("email", FieldKind::Email, "").required();
    assert_eq!(validate(&field), invalid("This field is required"));
}

#[test]
fn test_login_form_submission() {
    let form = vec![
        MemoryField::new("text", "username", "jane.doe").with_attribute("required", ""),
        MemoryField::new("password", "password", "Passw0rd").with_attribute("required", ""),
        MemoryField::new("text", "totp", "12345").with_attribute("required", ""),
    ];

    match on_submit(&form) {
        SubmitVerdict::Block { invalid_fields, notice } => {
            assert_eq!(invalid_fields, vec!["totp".to_string()]);
            assert_eq!(notice.message, "Please fix the errors in the form");
        }
        SubmitVerdict::Proceed => panic!("submission should be blocked"),
    }

    form[2].set_value("123456");
    assert_eq!(on_submit(&form), SubmitVerdict::Proceed);
}

#[test]
fn test_disabled_field_ignored_on_submit() {
    let form = vec![
        MemoryField::new("text", "symbol", "TOOLONG").disabled(),
        MemoryField::new("number", "quantity", "10"),
    ];
    assert_eq!(on_submit(&form), SubmitVerdict::Proceed);
}
