// File: src/config.rs
// Purpose: Declarative rule sets loaded from TOML

use crate::rule::{FieldRule, RuleError, RuleSet, RuleSpec};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a rule-set file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule set")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rule set")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Declarative rule-set document
///
/// ```toml
/// [fields]
/// Message = "Message"                 # label string: required, non-empty
///
/// [fields.Name]
/// label = "Name"
/// required = true
/// pattern = '^[A-Za-z \-]+$'          # single pattern
/// message = "letters, spaces and dashes only"
///
/// [fields.Body]
/// label = "Body"
/// required = true
///
/// [[fields.Body.patterns]]            # ordered pattern sequence
/// pattern = '^[\s\S]{10,}$'
/// message = "message too short"
///
/// [[fields.Body.patterns]]
/// pattern = '^[\s\S]{10,250}$'
/// message = "message too long"
/// ```
///
/// Custom checks are code-only; attach them to the loaded [`RuleSet`] with
/// [`RuleSet::insert`] afterwards.
#[derive(Debug, Deserialize)]
struct RuleSetConfig {
    #[serde(default)]
    fields: HashMap<String, FieldConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldConfig {
    /// Plain label string
    Label(String),
    /// Structured rule
    Spec(SpecConfig),
}

#[derive(Debug, Deserialize)]
struct SpecConfig {
    label: String,
    #[serde(default)]
    required: bool,
    /// Single pattern, exclusive with `patterns`
    pattern: Option<String>,
    /// Message for the single pattern
    message: Option<String>,
    /// Ordered pattern sequence
    #[serde(default)]
    patterns: Vec<PatternConfig>,
}

#[derive(Debug, Deserialize)]
struct PatternConfig {
    pattern: String,
    message: String,
}

impl SpecConfig {
    fn compile(self) -> Result<RuleSpec, RuleError> {
        let mut spec = RuleSpec::new(self.label);
        if self.required {
            spec = spec.required();
        }
        if let Some(pattern) = &self.pattern {
            spec = spec.pattern(pattern, self.message.clone().unwrap_or_default())?;
        }
        for entry in self.patterns {
            spec = spec.pattern(&entry.pattern, entry.message)?;
        }
        Ok(spec)
    }
}

impl RuleSet {
    /// Load a rule set from a TOML document
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let config: RuleSetConfig = toml::from_str(document)?;

        let mut rules = RuleSet::new();
        for (name, field) in config.fields {
            let rule = match field {
                FieldConfig::Label(label) => FieldRule::Label(label),
                FieldConfig::Spec(spec) => FieldRule::Spec(spec.compile()?),
            };
            rules.insert(name, rule);
        }

        tracing::debug!(rules = rules.len(), "loaded rule set");
        Ok(rules)
    }

    /// Load a rule set from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_toml(&document)
    }
}
