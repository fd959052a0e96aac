//! Field descriptors built from the current state of an input element

use serde::{Deserialize, Serialize};

/// Kind of input a descriptor was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Totp,
    Symbol,
    Number,
    Hidden,
    #[default]
    Generic,
}

impl FieldKind {
    /// Derive the kind from an input's `type` and `name` attributes
    ///
    /// Only the primary `password` field gets the strength rule; confirmation
    /// and current-password inputs stay generic.
    pub fn classify(input_type: &str, name: &str) -> Self {
        match (input_type, name) {
            ("hidden", _) => FieldKind::Hidden,
            ("email", _) => FieldKind::Email,
            ("password", "password") => FieldKind::Password,
            (_, "totp") => FieldKind::Totp,
            (_, "symbol") => FieldKind::Symbol,
            (_, "quantity" | "avg_cost") => FieldKind::Number,
            ("text", _) => FieldKind::Text,
            _ => FieldKind::Generic,
        }
    }
}

/// Declared constraints of a field (HTML attributes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
    /// Message shown when `pattern` does not match
    #[serde(default)]
    pub title: Option<String>,
}

/// The validated input's current value plus its declared constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub disabled: bool,
}

/// Read-only attribute access to an input element
///
/// Implemented by the browser adapter over `web-sys` elements and by
/// in-memory fields in tests.
pub trait FieldAttributes {
    /// The element's `type` (e.g. "text", "email", "textarea")
    fn input_type(&self) -> String;

    /// The element's `name`, empty when absent
    fn name(&self) -> String;

    /// Current value, untrimmed
    fn value(&self) -> String;

    fn is_disabled(&self) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            constraints: Constraints::default(),
            disabled: false,
        }
    }

    /// Descriptor for a field whose kind follows from its name alone
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let kind = FieldKind::classify("text", &name);
        Self::new(name, kind, value)
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>, title: Option<String>) -> Self {
        self.constraints.pattern = Some(pattern.into());
        self.constraints.title = title;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Snapshot an element's current state
    pub fn from_attributes<F: FieldAttributes + ?Sized>(field: &F) -> Self {
        let name = field.name();
        let kind = FieldKind::classify(&field.input_type(), &name);

        Self {
            kind,
            value: field.value(),
            constraints: Constraints {
                required: field.has_attribute("required"),
                min_length: parse_length(field.attribute("minlength")),
                max_length: parse_length(field.attribute("maxlength")),
                pattern: field.attribute("pattern"),
                title: field.attribute("title").filter(|t| !t.is_empty()),
            },
            disabled: field.is_disabled(),
            name,
        }
    }

    /// Trimmed value that every rule inspects
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

// Unparsable bounds are ignored, like a NaN comparison in the browser.
fn parse_length(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse().ok())
}
