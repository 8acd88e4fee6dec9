// File: src/rule.rs
// Purpose: Field rules, pattern sequences, and rule sets

use crate::form::Form;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building rules
#[derive(Debug, Error)]
pub enum RuleError {
    /// The pattern string is not a valid regular expression
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A regular expression paired with its failure message
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    /// Compile a pattern from a regex string
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(regex, message))
    }

    /// Wrap an already compiled regex
    pub fn from_regex(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            regex,
            message: message.into(),
        }
    }

    /// Test a value against the pattern
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A caller-supplied check invoked after required and pattern checks pass
///
/// Receives the form, the full rule set, and the field name; returns an error
/// message, or the empty string to pass. Contract: never panics.
pub type CustomCheck = Arc<dyn Fn(&Form, &RuleSet, &str) -> String + Send + Sync>;

/// Structured rule for one field
#[derive(Clone, Default)]
pub struct RuleSpec {
    /// Field label, prefixed to every error message
    pub label: String,
    /// Whether the field must be non-empty
    pub required: bool,
    /// Patterns tested in order; the first failure decides the message
    pub patterns: Vec<Pattern>,
    /// Optional custom check, run last
    pub check: Option<CustomCheck>,
}

impl RuleSpec {
    /// Create an optional rule with no patterns
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Mark the field required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append a pattern compiled from a regex string
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self, RuleError> {
        self.patterns.push(Pattern::new(pattern, message)?);
        Ok(self)
    }

    /// Append an already built pattern
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Attach a custom check
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&Form, &RuleSet, &str) -> String + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("label", &self.label)
            .field("required", &self.required)
            .field("patterns", &self.patterns)
            .field("check", &self.check.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Validation rule for one field
///
/// The plain-label form is shorthand for "required, non-empty": the string is
/// the label used in the required-field message and nothing else is checked.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Label string only: the field is required, no further checks
    Label(String),
    /// Full structured rule
    Spec(RuleSpec),
}

impl FieldRule {
    /// Shorthand for a plain-label rule
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// The field label, whichever form the rule takes
    pub fn field_label(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Spec(spec) => &spec.label,
        }
    }

    /// Whether the rule demands a non-empty value
    pub fn is_required(&self) -> bool {
        match self {
            Self::Label(_) => true,
            Self::Spec(spec) => spec.required,
        }
    }
}

impl From<RuleSpec> for FieldRule {
    fn from(spec: RuleSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<&str> for FieldRule {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

/// Rules keyed by field name
///
/// Keys are unique; insertion order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, FieldRule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule (builder style)
    pub fn with_rule(mut self, field: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.insert(field, rule);
        self
    }

    /// Add or replace a rule
    pub fn insert(&mut self, field: impl Into<String>, rule: impl Into<FieldRule>) {
        self.rules.insert(field.into(), rule.into());
    }

    /// Get the rule for a field
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Iterate over (field name, rule) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles_and_matches() {
        let pattern = Pattern::new(r"^[A-Za-z ]+$", "letters only").unwrap();
        assert!(pattern.matches("Ann Lee"));
        assert!(!pattern.matches("123"));
        assert_eq!(pattern.message(), "letters only");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Pattern::new(r"[unclosed", "broken").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_label_rule_is_required() {
        let rule = FieldRule::from("Message");
        assert!(rule.is_required());
        assert_eq!(rule.field_label(), "Message");
    }

    #[test]
    fn test_spec_defaults_to_optional() {
        let rule: FieldRule = RuleSpec::new("Phone").into();
        assert!(!rule.is_required());

        let rule: FieldRule = RuleSpec::new("Phone").required().into();
        assert!(rule.is_required());
    }

    #[test]
    fn test_rule_set_lookup() {
        let rules = RuleSet::new()
            .with_rule("Name", RuleSpec::new("Name").required())
            .with_rule("Message", "Message");

        assert_eq!(rules.len(), 2);
        assert!(rules.rule("Name").is_some());
        assert!(rules.rule("Nope").is_none());
    }

    #[test]
    fn test_rule_set_keys_unique() {
        let mut rules = RuleSet::new();
        rules.insert("Name", "First");
        rules.insert("Name", "Second");

        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rule("Name").unwrap().field_label(), "Second");
    }
}
