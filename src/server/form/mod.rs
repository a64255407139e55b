//! Form input types and their validation.
//!
//! Each form has a raw input struct holding exactly what the browser submitted and a
//! `validate` function turning it into a validated value or a [`FormErrors`] list.
//! Page handlers re-render the form with those errors; the JSON API converts them into
//! a 400 response through `AppError::ValidationErr`.

pub mod auth;
pub mod category;
pub mod recipe;

use serde::Serialize;
use std::fmt;

/// Message used for every required field left blank.
pub const REQUIRED: &str = "This field is required.";

/// Validation error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered validation errors of a submitted form.
///
/// Field errors keep submission order so they render next to the inputs they belong
/// to; errors that concern the form as a whole are kept separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub fields: Vec<FieldError>,
    pub non_field: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against a named field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Records an error that is not tied to a single field.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field.push(message.into());
    }

    /// Builds an error list holding a single non-field message.
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_non_field(message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.non_field.is_empty()
    }

    /// Messages recorded for `field`, in order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns `value` when no error was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .chain(self.non_field.iter().cloned())
            .collect();

        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Trims a text input and records [`REQUIRED`] when nothing is left.
pub(crate) fn required(errors: &mut FormErrors, field: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

/// Records an error when `value` is longer than `max` characters.
pub(crate) fn max_chars(errors: &mut FormErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, len
            ),
        );
    }
}
