// File: src/evaluate.rs
// Purpose: Per-field rule evaluation, the core of the library

use crate::form::Form;
use crate::rule::{FieldRule, RuleSet, RuleSpec};

/// Separator between the field label and the error text
pub const MESSAGE_SEPARATOR: &str = " - ";

/// Error text for a missing required value
pub const REQUIRED_MESSAGE: &str = "required field";

/// Evaluate the named field against its rule
///
/// Returns the error message, or the empty string when the field is valid.
/// A field missing from the form, or a field with no rule, reports no error.
///
/// Check order:
/// 1. Required: an empty value (or one equal to the placeholder hint) on a
///    required field fails immediately; nothing else runs.
/// 2. Patterns, in sequence order: the first failing pattern decides the
///    message. Skipped entirely when the field is optional and empty.
/// 3. Custom check, only when required and pattern checks both passed; a
///    non-empty return takes the final message slot.
pub fn field_error(form: &Form, rules: &RuleSet, name: &str) -> String {
    let Some(field) = form.field(name) else {
        return String::new();
    };
    let Some(rule) = rules.rule(name) else {
        return String::new();
    };

    match rule {
        FieldRule::Label(label) => {
            if field.is_empty() || field.matches_placeholder() {
                message(label, REQUIRED_MESSAGE)
            } else {
                String::new()
            }
        }
        FieldRule::Spec(spec) => {
            if (spec.required && field.is_empty()) || field.matches_placeholder() {
                message(&spec.label, REQUIRED_MESSAGE)
            } else if spec.required || !field.is_empty() {
                spec_error(spec, &field.value, form, rules, name)
            } else {
                // Optional and empty: nothing to check
                String::new()
            }
        }
    }
}

/// Pattern sequence and custom check for a structured rule
fn spec_error(spec: &RuleSpec, value: &str, form: &Form, rules: &RuleSet, name: &str) -> String {
    for pattern in &spec.patterns {
        if !pattern.matches(value) {
            return message(&spec.label, pattern.message());
        }
    }

    if let Some(check) = &spec.check {
        let custom = check(form, rules, name);
        if !custom.is_empty() {
            return message(&spec.label, &custom);
        }
    }

    String::new()
}

fn message(label: &str, text: &str) -> String {
    format!("{label}{MESSAGE_SEPARATOR}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use rstest::rstest;

    fn name_rules() -> RuleSet {
        RuleSet::new().with_rule(
            "Name",
            RuleSpec::new("Name")
                .required()
                .pattern(r"^[A-Za-z ]+$", "letters only")
                .unwrap(),
        )
    }

    fn form_with(name: &str, value: &str) -> Form {
        Form::new("f").with_field(Field::new(name, value))
    }

    #[rstest]
    #[case("", "Name - required field")]
    #[case("123", "Name - letters only")]
    #[case("Ann", "")]
    fn test_required_pattern_rule(#[case] value: &str, #[case] expected: &str) {
        let form = form_with("Name", value);
        assert_eq!(field_error(&form, &name_rules(), "Name"), expected);
    }

    #[rstest]
    #[case("", "Message - required field")]
    #[case("hi", "")]
    fn test_label_rule(#[case] value: &str, #[case] expected: &str) {
        let form = form_with("Message", value);
        let rules = RuleSet::new().with_rule("Message", "Message");
        assert_eq!(field_error(&form, &rules, "Message"), expected);
    }

    #[test]
    fn test_label_rule_placeholder_counts_as_empty() {
        let form = Form::new("f")
            .with_field(Field::new("Message", "Enter message").with_placeholder("Enter message"));
        let rules = RuleSet::new().with_rule("Message", "Message");

        assert_eq!(
            field_error(&form, &rules, "Message"),
            "Message - required field"
        );
    }

    #[test]
    fn test_placeholder_beats_pattern_on_structured_rule() {
        // The placeholder check fires even on an optional field
        let form = Form::new("f")
            .with_field(Field::new("Phone", "Your phone").with_placeholder("Your phone"));
        let rules = RuleSet::new().with_rule(
            "Phone",
            RuleSpec::new("Phone").pattern(r"^\d+$", "digits only").unwrap(),
        );

        assert_eq!(field_error(&form, &rules, "Phone"), "Phone - required field");
    }

    #[test]
    fn test_required_short_circuits_pattern() {
        let form = form_with("Name", "");
        // Pattern would also fail on "", but the required message wins
        assert_eq!(
            field_error(&form, &name_rules(), "Name"),
            "Name - required field"
        );
    }

    #[test]
    fn test_optional_empty_skips_pattern() {
        let form = form_with("Phone", "");
        let rules = RuleSet::new().with_rule(
            "Phone",
            RuleSpec::new("Phone").pattern(r"^\d+$", "digits only").unwrap(),
        );

        assert_eq!(field_error(&form, &rules, "Phone"), "");
    }

    #[test]
    fn test_optional_filled_is_pattern_checked() {
        let form = form_with("Phone", "abc");
        let rules = RuleSet::new().with_rule(
            "Phone",
            RuleSpec::new("Phone").pattern(r"^\d+$", "digits only").unwrap(),
        );

        assert_eq!(field_error(&form, &rules, "Phone"), "Phone - digits only");
    }

    #[test]
    fn test_pattern_sequence_first_failure_wins() {
        let rules = RuleSet::new().with_rule(
            "Message",
            RuleSpec::new("Message")
                .required()
                .pattern(r"^[\s\S]{10,}$", "message too short")
                .unwrap()
                .pattern(r"^[\s\S]{10,250}$", "message too long")
                .unwrap(),
        );

        // "hi" fails both patterns; the first entry's message is reported
        let form = form_with("Message", "hi");
        assert_eq!(
            field_error(&form, &rules, "Message"),
            "Message - message too short"
        );

        let form = form_with("Message", &"x".repeat(300));
        assert_eq!(
            field_error(&form, &rules, "Message"),
            "Message - message too long"
        );

        let form = form_with("Message", "long enough text");
        assert_eq!(field_error(&form, &rules, "Message"), "");
    }

    #[test]
    fn test_custom_check_runs_after_patterns() {
        let rules = RuleSet::new().with_rule(
            "Email",
            RuleSpec::new("Email")
                .required()
                .pattern(r"^\S+@\S+$", "invalid E-mail address")
                .unwrap()
                .check(|form, _rules, name| {
                    let value = form.value(name).unwrap_or_default();
                    if value.ends_with("@example.com") {
                        "example addresses are not accepted".to_string()
                    } else {
                        String::new()
                    }
                }),
        );

        // Pattern failure suppresses the custom check
        let form = form_with("Email", "nope");
        assert_eq!(
            field_error(&form, &rules, "Email"),
            "Email - invalid E-mail address"
        );

        // Pattern passes, custom check fails
        let form = form_with("Email", "a@example.com");
        assert_eq!(
            field_error(&form, &rules, "Email"),
            "Email - example addresses are not accepted"
        );

        // Both pass
        let form = form_with("Email", "a@b.org");
        assert_eq!(field_error(&form, &rules, "Email"), "");
    }

    #[test]
    fn test_custom_check_skipped_when_required_fails() {
        let called = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let seen = called.clone();
        let rules = RuleSet::new().with_rule(
            "Name",
            RuleSpec::new("Name").required().check(move |_, _, _| {
                seen.store(true, std::sync::atomic::Ordering::SeqCst);
                String::new()
            }),
        );

        let form = form_with("Name", "");
        assert_eq!(field_error(&form, &rules, "Name"), "Name - required field");
        assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_missing_field_or_rule_reports_nothing() {
        let form = form_with("Name", "");
        let rules = name_rules();

        assert_eq!(field_error(&form, &rules, "Phone"), "");

        let unruled = RuleSet::new();
        assert_eq!(field_error(&form, &unruled, "Name"), "");
    }
}
