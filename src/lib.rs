// formcheck - declarative form validation
// Rule sets keyed by field name, evaluated against an in-memory form model,
// with pluggable error presentation and form serialization

pub mod blur;
pub mod config;
pub mod evaluate;
pub mod form;
pub mod present;
pub mod request;
pub mod rule;
pub mod validate;
pub mod validators;

// Re-export the core types and operations
pub use blur::BlurValidator;
pub use config::ConfigError;
pub use evaluate::{field_error, MESSAGE_SEPARATOR, REQUIRED_MESSAGE};
pub use form::{Field, Form};
pub use present::{
    error_id, ErrorLabel, ErrorPresenter, InlineErrors, SummaryPresenter, ERROR_CLASS,
};
pub use request::request_body;
pub use rule::{CustomCheck, FieldRule, Pattern, RuleError, RuleSet, RuleSpec};
pub use validate::{validate_all, validate_all_with, ErrorMap};

// Re-export Maud so hosts can embed rendered error labels
pub use maud::{self, Markup};
