//! Gated contact form: field definitions, values, and presence/format checks

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select {
        placeholder: String,
        options: Vec<SelectOption>,
    },
    Textarea,
    Checkbox,
}

impl FieldKind {
    /// HTML `type` attribute for kinds rendered as a plain `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Checkbox => "checkbox",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Fields of the private viewing request, used when the listing doesn't
/// configure its own.
pub fn default_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Full Name", FieldKind::Text, true),
        FormField::new("email", "Email Address", FieldKind::Email, true),
        FormField::new("phone", "Phone Number", FieldKind::Tel, true),
        FormField::new(
            "preferredDates",
            "Preferred Viewing Dates",
            FieldKind::Text,
            false,
        ),
        FormField::new(
            "proofOfFunds",
            "I will provide proof of funds or broker introduction",
            FieldKind::Checkbox,
            true,
        ),
    ]
}

/// Per-field messages from a failed validation, keyed by field name.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{} contact field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Values of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub values: BTreeMap<String, FieldValue>,
}

impl ContactSubmission {
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: Vec<FormField>,
    values: BTreeMap<String, FieldValue>,
    errors: ValidationErrors,
    submitted: bool,
}

impl ContactForm {
    /// Form over `fields`, or over [`default_fields`] when none are given.
    pub fn new(fields: Vec<FormField>) -> Self {
        let fields = if fields.is_empty() {
            default_fields()
        } else {
            fields
        };
        Self {
            fields,
            values: BTreeMap::new(),
            errors: ValidationErrors::default(),
            submitted: false,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn checked(&self, field: &str) -> bool {
        matches!(self.values.get(field), Some(FieldValue::Checked(true)))
    }

    /// Editing a field clears its error.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), FieldValue::Text(value.into()));
        self.errors.errors.remove(field);
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) {
        self.values
            .insert(field.to_string(), FieldValue::Checked(checked));
        self.errors.errors.remove(field);
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Check required fields and email format. The resulting errors are kept
    /// on the form for display.
    pub fn validate(&mut self) -> Result<ContactSubmission, ValidationErrors> {
        let mut errors = BTreeMap::new();
        for field in self.fields.iter().filter(|f| f.required) {
            if let Some(message) = self.check(field) {
                errors.insert(field.name.clone(), message);
            }
        }
        self.errors = ValidationErrors { errors };
        if self.errors.is_empty() {
            Ok(ContactSubmission {
                values: self.values.clone(),
            })
        } else {
            debug!("Contact form has {} invalid field(s)", self.errors.len());
            Err(self.errors.clone())
        }
    }

    /// Validate and, on success, mark the form as submitted. A submitted form
    /// can't be submitted again.
    pub fn submit(&mut self) -> Result<Option<ContactSubmission>, ValidationErrors> {
        if self.submitted {
            return Ok(None);
        }
        let submission = self.validate()?;
        self.submitted = true;
        info!("Contact form submitted");
        Ok(Some(submission))
    }

    fn check(&self, field: &FormField) -> Option<String> {
        if field.kind == FieldKind::Checkbox {
            return (!self.checked(&field.name)).then(|| "This field is required".to_string());
        }
        let value = self.text(&field.name);
        if value.trim().is_empty() {
            return Some(format!("{} is required", field.label));
        }
        if field.kind == FieldKind::Email && !email_pattern().is_match(value) {
            return Some("Please enter a valid email address".to_string());
        }
        None
    }
}
