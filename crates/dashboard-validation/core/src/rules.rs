//! Ordered rule table
//!
//! Each rule pairs a predicate deciding whether it applies to a field with
//! the check it runs. Rules are evaluated top to bottom and the first rule
//! that applies is the only one checked.

use crate::codes::{validate_stock_symbol, validate_totp};
use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::email::validate_email;
use crate::numeric::validate_positive_number;
use crate::password::validate_password;
use crate::string::{
    validate_max_length, validate_min_length, validate_pattern, REQUIRED_MESSAGE,
};
use crate::username::validate_username;

/// Predicate over a field and its trimmed value
pub type Applies = fn(&FieldDescriptor, &str) -> bool;

/// Check over a field and its trimmed value, `Err` carries the message
pub type Check = fn(&FieldDescriptor, &str) -> Result<(), String>;

/// A single named validation policy
pub struct Rule {
    pub name: &'static str,
    pub applies: Applies,
    pub check: Check,
}

impl Rule {
    pub fn applies_to(&self, field: &FieldDescriptor, value: &str) -> bool {
        (self.applies)(field, value)
    }

    pub fn run(&self, field: &FieldDescriptor, value: &str) -> Result<(), String> {
        (self.check)(field, value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "required",
        applies: required_missing,
        check: fail_required,
    },
    Rule {
        name: "email",
        applies: is_email,
        check: check_email,
    },
    Rule {
        name: "password",
        applies: is_password,
        check: check_password,
    },
    Rule {
        name: "username",
        applies: is_username,
        check: check_username,
    },
    Rule {
        name: "totp",
        applies: is_totp,
        check: check_totp,
    },
    Rule {
        name: "symbol",
        applies: is_symbol,
        check: check_symbol,
    },
    Rule {
        name: "positive_number",
        applies: is_positive_amount,
        check: check_positive_number,
    },
    Rule {
        name: "min_length",
        applies: has_min_length,
        check: check_min_length,
    },
    Rule {
        name: "max_length",
        applies: has_max_length,
        check: check_max_length,
    },
    Rule {
        name: "pattern",
        applies: has_pattern,
        check: check_pattern,
    },
];

/// First rule that applies to the field, if any
pub fn first_applicable(field: &FieldDescriptor, value: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.applies_to(field, value))
}

fn required_missing(field: &FieldDescriptor, value: &str) -> bool {
    field.constraints.required && value.is_empty()
}

fn fail_required(_: &FieldDescriptor, _: &str) -> Result<(), String> {
    Err(REQUIRED_MESSAGE.to_string())
}

fn is_email(field: &FieldDescriptor, value: &str) -> bool {
    field.kind == FieldKind::Email && !value.is_empty()
}

fn check_email(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_email(value)
}

fn is_password(field: &FieldDescriptor, value: &str) -> bool {
    field.kind == FieldKind::Password && !value.is_empty()
}

fn check_password(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_password(value)
}

fn is_username(field: &FieldDescriptor, value: &str) -> bool {
    field.name == "username" && !value.is_empty()
}

fn check_username(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_username(value)
}

fn is_totp(field: &FieldDescriptor, value: &str) -> bool {
    (field.name == "totp" || field.kind == FieldKind::Totp) && !value.is_empty()
}

fn check_totp(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_totp(value)
}

fn is_symbol(field: &FieldDescriptor, value: &str) -> bool {
    (field.name == "symbol" || field.kind == FieldKind::Symbol) && !value.is_empty()
}

fn check_symbol(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_stock_symbol(value)
}

fn is_positive_amount(field: &FieldDescriptor, value: &str) -> bool {
    let named = matches!(field.name.as_str(), "quantity" | "avg_cost");
    (named || field.kind == FieldKind::Number) && !value.is_empty()
}

fn check_positive_number(_: &FieldDescriptor, value: &str) -> Result<(), String> {
    validate_positive_number(value)
}

fn has_min_length(field: &FieldDescriptor, value: &str) -> bool {
    field.constraints.min_length.is_some() && !value.is_empty()
}

fn check_min_length(field: &FieldDescriptor, value: &str) -> Result<(), String> {
    match field.constraints.min_length {
        Some(min) => validate_min_length(value, min),
        None => Ok(()),
    }
}

fn has_max_length(field: &FieldDescriptor, value: &str) -> bool {
    field.constraints.max_length.is_some() && !value.is_empty()
}

fn check_max_length(field: &FieldDescriptor, value: &str) -> Result<(), String> {
    match field.constraints.max_length {
        Some(max) => validate_max_length(value, max),
        None => Ok(()),
    }
}

fn has_pattern(field: &FieldDescriptor, value: &str) -> bool {
    field.constraints.pattern.is_some() && !value.is_empty()
}

fn check_pattern(field: &FieldDescriptor, value: &str) -> Result<(), String> {
    match field.constraints.pattern.as_deref() {
        Some(pattern) => validate_pattern(value, pattern, field.constraints.title.as_deref()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_names() -> Vec<&'static str> {
        RULES.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            rule_names(),
            vec![
                "required",
                "email",
                "password",
                "username",
                "totp",
                "symbol",
                "positive_number",
                "min_length",
                "max_length",
                "pattern",
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Username with a minlength: the username rule shadows min_length
        let field = FieldDescriptor::named("username", "bob").with_min_length(10);
        let rule = first_applicable(&field, field.trimmed()).unwrap();
        assert_eq!(rule.name, "username");
        assert!(rule.run(&field, field.trimmed()).is_ok());

        // min_length shadows max_length and pattern
        let field = FieldDescriptor::named("notes", "abc")
            .with_min_length(2)
            .with_max_length(1)
            .with_pattern("^z", None);
        assert_eq!(first_applicable(&field, "abc").unwrap().name, "min_length");
    }

    #[test]
    fn test_empty_optional_matches_nothing() {
        let field = FieldDescriptor::named("symbol", "")
            .with_min_length(3)
            .with_pattern("x", None);
        assert!(first_applicable(&field, "").is_none());
    }

    #[test]
    fn test_required_only_when_empty() {
        let field = FieldDescriptor::named("symbol", "aapl").required();
        assert_eq!(first_applicable(&field, "aapl").unwrap().name, "symbol");

        let field = FieldDescriptor::named("symbol", "").required();
        assert_eq!(first_applicable(&field, "").unwrap().name, "required");
    }
}
