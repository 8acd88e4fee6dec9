// File: src/validate.rs
// Purpose: Bulk validation pass and the ErrorMap it produces

use crate::evaluate::field_error;
use crate::form::Form;
use crate::present::ErrorPresenter;
use crate::rule::RuleSet;
use serde::Serialize;
use std::collections::HashMap;

/// Result of a validation pass: field names mapped to error messages
///
/// Entries exist only for fields that failed. The map is unordered; presenters
/// that need a stable order iterate the form's field order instead.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: HashMap<String, String>,
}

impl ErrorMap {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field; empty messages are ignored
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        if !message.is_empty() {
            self.entries.insert(field.into(), message);
        }
    }

    /// Check if a field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Get the message for a field
    pub fn message(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (field name, message) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Validate every ruled field of a form
///
/// Applies [`field_error`] to each key of the rule set and collects non-empty
/// messages. Fields named in the rule set but absent from the form are
/// silently skipped. Returns `None` when every check passes.
pub fn validate_all(form: &Form, rules: &RuleSet) -> Option<ErrorMap> {
    let mut errors = ErrorMap::new();

    for (name, _) in rules.iter() {
        let message = field_error(form, rules, name);
        if !message.is_empty() {
            tracing::debug!(form = %form.name, field = name, %message, "field failed validation");
            errors.insert(name, message);
        }
    }

    if errors.is_empty() {
        tracing::debug!(form = %form.name, "validation passed");
        None
    } else {
        tracing::debug!(form = %form.name, failed = errors.len(), "validation failed");
        Some(errors)
    }
}

/// Validate a form and hand any errors to a presenter
///
/// The presenter is invoked only when at least one field failed.
pub fn validate_all_with<P: ErrorPresenter>(
    form: &Form,
    rules: &RuleSet,
    presenter: &mut P,
) -> Option<ErrorMap> {
    let errors = validate_all(form, rules)?;
    presenter.present(&errors, form);
    Some(errors)
}
