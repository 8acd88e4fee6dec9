// File: src/present.rs
// Purpose: Pluggable error presentation: summary notice and inline labels

use crate::form::Form;
use crate::validate::ErrorMap;
use maud::{html, Markup};

/// Default CSS class on generated error labels
pub const ERROR_CLASS: &str = "form_field_error";

/// Strategy consuming a validation pass's errors
///
/// Supplied to [`crate::validate_all_with`]; called only when errors exist.
pub trait ErrorPresenter {
    fn present(&mut self, errors: &ErrorMap, form: &Form);
}

/// Collects all messages into a single notice string
///
/// The modal-alert style of presentation: one block of text the host shows
/// however it likes. Messages appear in form field order.
#[derive(Debug, Clone)]
pub struct SummaryPresenter {
    heading: String,
    notice: Option<String>,
}

impl SummaryPresenter {
    /// Create a presenter with the given heading line
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            notice: None,
        }
    }

    /// The notice built by the last presentation, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Take the notice, leaving the presenter empty
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

impl Default for SummaryPresenter {
    fn default() -> Self {
        Self::new("Please correct:")
    }
}

impl ErrorPresenter for SummaryPresenter {
    fn present(&mut self, errors: &ErrorMap, form: &Form) {
        let mut notice = self.heading.clone();
        for field in form.fields() {
            if let Some(message) = errors.message(&field.name) {
                notice.push_str("\n   ");
                notice.push_str(message);
            }
        }
        self.notice = Some(notice);
    }
}

/// One generated error label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLabel {
    /// Element id, `"{form}_{field}_error"`
    pub id: String,
    /// Name of the field the label belongs to
    pub field: String,
    /// Error text
    pub message: String,
}

impl ErrorLabel {
    /// Render the label as an HTML fragment
    pub fn render(&self, class: &str) -> Markup {
        html! {
            div class=(class) id=(self.id) { (self.message) }
        }
    }
}

/// Id of the error label generated for a field
pub fn error_id(form: &Form, field: &str) -> String {
    format!("{}_{}_error", form.name, field)
}

/// Per-field inline error labels
///
/// Holds the labels a host embeds next to the matching inputs. Presenting
/// replaces any existing label for the same field before inserting the new
/// one, so repeated passes never duplicate labels.
#[derive(Debug, Clone)]
pub struct InlineErrors {
    class: String,
    labels: Vec<ErrorLabel>,
}

impl InlineErrors {
    /// Create an empty label store with the default CSS class
    pub fn new() -> Self {
        Self::with_class(ERROR_CLASS)
    }

    /// Create an empty label store with a custom CSS class
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            labels: Vec::new(),
        }
    }

    /// Create or replace the label for a field
    ///
    /// An empty message removes the label instead, clearing a stale error.
    /// Fields absent from the form are ignored.
    pub fn set_message(&mut self, form: &Form, field: &str, message: impl Into<String>) {
        if form.field(field).is_none() {
            return;
        }

        let id = error_id(form, field);
        self.labels.retain(|l| l.id != id);

        let message = message.into();
        if !message.is_empty() {
            self.labels.push(ErrorLabel {
                id,
                field: field.to_string(),
                message,
            });
        }
    }

    /// Get the label for a field, if one is shown
    pub fn label(&self, form: &Form, field: &str) -> Option<&ErrorLabel> {
        let id = error_id(form, field);
        self.labels.iter().find(|l| l.id == id)
    }

    /// Remove every label generated for the form's fields
    pub fn clear(&mut self, form: &Form) {
        for field in form.fields() {
            let id = error_id(form, &field.name);
            self.labels.retain(|l| l.id != id);
        }
    }

    /// All current labels, in insertion order
    pub fn labels(&self) -> &[ErrorLabel] {
        &self.labels
    }

    /// Render every label as one HTML fragment
    pub fn render(&self) -> Markup {
        html! {
            @for label in &self.labels {
                (label.render(&self.class))
            }
        }
    }

    /// The CSS class applied to rendered labels
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Default for InlineErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPresenter for InlineErrors {
    fn present(&mut self, errors: &ErrorMap, form: &Form) {
        for field in form.fields() {
            if let Some(message) = errors.message(&field.name) {
                self.set_message(form, &field.name, message);
            }
        }
    }
}
