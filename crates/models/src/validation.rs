use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Not a valid choice.")]
    InvalidChoice,
    #[error("Departments can not be the same, please choose a different department")]
    SameDepartment,
    #[error("The CSRF token is missing.")]
    CsrfMissing,
    #[error("The CSRF token is invalid.")]
    CsrfInvalid,
    #[error("Field cannot be longer than {max} characters.")]
    TooLong { max: usize },
}

/// Validation messages keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, error: ValidationError) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(error.to_string());
    }

    /// Folds another set of errors into this one
    pub fn merge(&mut self, other: FormErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Converts to a `Result`, succeeding with `value` when nothing was recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Mirrors a "data required" check: absent, empty, and whitespace-only input all fail
pub fn required(value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Required),
    }
}

/// Rejects input with more than `max` characters (not bytes)
pub fn max_length(value: &str, max: usize) -> Result<&str, ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { max })
    } else {
        Ok(value)
    }
}
