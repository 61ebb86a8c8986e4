//! Declarative form validation rules and their outcomes.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use rentdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whole-form record handed to custom rules.
pub type FormData = Map<String, Value>;

/// Cross-field capable predicate returning an error message on failure.
pub type CustomRule = Arc<dyn Fn(&Value, &FormData) -> Option<String> + Send + Sync>;

/// Constraints attached to one form field.
///
/// Checks run in a fixed order and stop at the first failure; see the
/// validator for the precedence.
#[derive(Clone, Default)]
pub struct ValidationRule {
    /// Value must be present and not blank.
    pub required: bool,
    /// Minimum trimmed length in characters.
    pub min_length: Option<usize>,
    /// Maximum trimmed length in characters.
    pub max_length: Option<usize>,
    /// Minimum numeric value.
    pub min: Option<f64>,
    /// Maximum numeric value.
    pub max: Option<f64>,
    /// Expression the trimmed value must match.
    pub pattern: Option<Regex>,
    /// Value must look like an email address.
    pub email: bool,
    /// Value must look like a phone number.
    pub phone: bool,
    /// Value must parse as an absolute URL.
    pub url: bool,
    /// Value must parse as a date.
    pub date: bool,
    /// Arbitrary predicate; its message is reported verbatim.
    pub custom: Option<CustomRule>,
}

impl ValidationRule {
    /// Creates an empty rule that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Sets the minimum numeric value.
    #[must_use]
    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    /// Sets the maximum numeric value.
    #[must_use]
    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    /// Sets a compiled pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles and sets a pattern.
    pub fn pattern_str(self, pattern: &str) -> AppResult<Self> {
        let compiled = Regex::new(pattern).map_err(|error| {
            AppError::Validation(format!("invalid validation pattern '{pattern}': {error}"))
        })?;

        Ok(self.pattern(compiled))
    }

    /// Requires an email address.
    #[must_use]
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Requires a phone number.
    #[must_use]
    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }

    /// Requires a URL.
    #[must_use]
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// Requires a date.
    #[must_use]
    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    /// Sets a custom predicate.
    #[must_use]
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &FormData) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("url", &self.url)
            .field("date", &self.date)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Ordered field-to-rule mapping for one form.
///
/// Fields are validated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    fields: Vec<(String, ValidationRule)>,
}

impl FormRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field rule, replacing any earlier rule for the same field in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = rule,
            None => self.fields.push((name, rule)),
        }
        self
    }

    /// Returns the rule for a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Returns the number of ruled fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether no field carries a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field-addressed validation failure for inline display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field the message belongs to.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message.as_str())
    }
}

/// Aggregate outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// One error per failing field, in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from collected errors.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the error reported for a field, if any.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }
}
