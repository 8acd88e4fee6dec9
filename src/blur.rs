// File: src/blur.rs
// Purpose: Focus/blur validation wiring over the field evaluator

use crate::evaluate::field_error;
use crate::form::Form;
use crate::present::InlineErrors;
use crate::rule::RuleSet;
use std::collections::HashMap;

/// Validates fields as the user leaves them
///
/// The host UI reports focus and blur; this tracks the value each field had
/// when entered so that a required field the user never filled is not flagged
/// the moment they tab through it. Emptied optional fields get their stale
/// labels cleared, and emptied required fields that had content are flagged.
#[derive(Debug, Default)]
pub struct BlurValidator {
    focus_values: HashMap<String, String>,
}

impl BlurValidator {
    /// Create a validator with no fields tracked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a field gained focus, capturing its current value
    pub fn focus(&mut self, form: &Form, field: &str) {
        if let Some(value) = form.value(field) {
            self.focus_values.insert(field.to_string(), value.to_string());
        }
    }

    /// Validate a field as it loses focus, updating the inline labels
    ///
    /// Returns the error message shown, or the empty string when the label
    /// was cleared or the blur was suppressed.
    pub fn blur(
        &mut self,
        form: &Form,
        rules: &RuleSet,
        field: &str,
        inline: &mut InlineErrors,
    ) -> String {
        let Some(value) = form.value(field) else {
            return String::new();
        };
        let Some(rule) = rules.rule(field) else {
            return String::new();
        };

        // A required field empty now and empty when entered was never
        // touched; flagging it here would nag before any input attempt.
        let had_value = self.focus_values.get(field).is_some_and(|v| !v.is_empty());
        if value.is_empty() && !had_value && rule.is_required() {
            return String::new();
        }

        let message = field_error(form, rules, field);
        inline.set_message(form, field, message.clone());
        message
    }
}
