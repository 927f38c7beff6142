//! Failure message formatting
//!
//! A failure message has two parts:
//!
//! - the *condition*: either the check's default phrase
//!   (`"age should be greater than 5"`) or a caller-supplied description
//!   template in which `{0}` stands for the argument name
//! - an optional *additional message* that elaborates on the condition
//!
//! The composed message is `condition + "."`, or
//! `condition + ". " + additional` when an elaboration is present.
//!
//! Templates are rendered tolerantly: only `{0}` is substituted. Any other
//! placeholder (`{1}`, `{name}`, an unbalanced brace) is passed through
//! literally.
//!
//! # Example
//!
//! ```rust
//! use stipulate::message::{compose, render_template};
//!
//! assert_eq!(render_template("{0} must be set", "port"), "port must be set");
//! assert_eq!(render_template("{0} vs {1}", "port"), "port vs {1}");
//! assert_eq!(compose("port must be set", None), "port must be set.");
//! assert_eq!(
//!     compose("port must be set", Some("Got 0.")),
//!     "port must be set. Got 0."
//! );
//! ```

/// Argument name used when a holder is created without one.
pub const DEFAULT_ARGUMENT_NAME: &str = "value";

const ARGUMENT_PLACEHOLDER: &str = "{0}";

/// Substitute every `{0}` in `template` with `argument_name`.
///
/// Other placeholders are left untouched.
pub fn render_template(template: &str, argument_name: &str) -> String {
    template.replace(ARGUMENT_PLACEHOLDER, argument_name)
}

/// Build the condition text for a failed check.
///
/// Uses the caller's `description` template when given, otherwise the
/// check's default phrase built from the argument name.
pub fn condition<F>(description: Option<&str>, argument_name: &str, default_phrase: F) -> String
where
    F: FnOnce(&str) -> String,
{
    match description {
        Some(template) => render_template(template, argument_name),
        None => default_phrase(argument_name),
    }
}

/// Join a condition and an optional elaboration into the final message.
pub fn compose(condition: &str, additional_message: Option<&str>) -> String {
    match additional_message {
        Some(additional) if !additional.is_empty() => format!("{condition}. {additional}"),
        _ => format!("{condition}."),
    }
}

/// Render an argument name for display, substituting the default for an
/// empty name.
pub fn display_name(argument_name: &str) -> &str {
    if argument_name.is_empty() {
        DEFAULT_ARGUMENT_NAME
    } else {
        argument_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_substitutes_every_occurrence() {
        assert_eq!(render_template("{0} and {0}", "x"), "x and x");
    }

    #[test]
    fn test_render_template_passes_malformed_placeholders_through() {
        assert_eq!(render_template("{1} should be set", "x"), "{1} should be set");
        assert_eq!(render_template("{0 should be set", "x"), "{0 should be set");
        assert_eq!(render_template("{{0}} literal", "x"), "{x} literal");
    }

    #[test]
    fn test_render_template_without_placeholder() {
        assert_eq!(render_template("must be set", "x"), "must be set");
    }

    #[test]
    fn test_condition_prefers_description() {
        let text = condition(Some("{0} is required"), "port", |name| {
            format!("{name} should not be null")
        });
        assert_eq!(text, "port is required");
    }

    #[test]
    fn test_condition_falls_back_to_default_phrase() {
        let text = condition(None, "port", |name| format!("{name} should not be null"));
        assert_eq!(text, "port should not be null");
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose("a", None), "a.");
        assert_eq!(compose("a", Some("b")), "a. b");
        assert_eq!(compose("a", Some("")), "a.");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(""), "value");
        assert_eq!(display_name("port"), "port");
    }
}
