//! Form validation for the user draft.
//!
//! Runs before every submit and blocks submission on failure. The checks are
//! the form's own: the server does not repeat them. Name and email must be
//! present, the email must look like `local@domain.tld`, and the age must be
//! a number strictly greater than zero.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Draft, UserInput};

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    /// Field name as it appears on the wire and next to the form input.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
        }
    }
}

/// Map from failing field to a human-readable message.
///
/// Submission proceeds only when this map is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for the given field, if it failed.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Validate a draft, producing the typed payload or per-field messages.
pub fn validate(draft: &Draft) -> Result<UserInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !email_pattern().is_match(email) {
        errors.insert(Field::Email, "Email is invalid");
    }

    // The placeholder age never escapes: recording an error below means the
    // draft is rejected before a payload is built.
    let age = match draft.age.trim() {
        "" => {
            errors.insert(Field::Age, "Age is required");
            0
        }
        raw => match raw.parse::<u32>() {
            Ok(age) if age > 0 => age,
            _ => {
                errors.insert(Field::Age, "Age must be greater than 0");
                0
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(UserInput {
        name: name.to_string(),
        email: email.to_string(),
        age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, age: &str) -> Draft {
        Draft {
            name: name.to_string(),
            email: email.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn valid_draft_produces_payload() {
        let input = validate(&draft("A", "a@b.com", "5")).unwrap();
        assert_eq!(input.name, "A");
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.age, 5);
    }

    #[test]
    fn blank_name_fails_name_only() {
        let errors = validate(&draft("", "a@b.com", "5")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Name), Some("Name is required"));
    }

    #[test]
    fn whitespace_name_counts_as_blank() {
        let errors = validate(&draft("   ", "a@b.com", "5")).unwrap_err();
        assert_eq!(errors.message(Field::Name), Some("Name is required"));
    }

    #[test]
    fn missing_email_fails_email_only() {
        let errors = validate(&draft("A", "", "5")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email), Some("Email is required"));
    }

    #[test]
    fn malformed_email_fails_email_only() {
        let errors = validate(&draft("A", "bad", "5")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email), Some("Email is invalid"));
    }

    #[test]
    fn email_needs_a_dot_in_the_domain() {
        let errors = validate(&draft("A", "a@b", "5")).unwrap_err();
        assert_eq!(errors.message(Field::Email), Some("Email is invalid"));
    }

    #[test]
    fn missing_age_fails_age_only() {
        let errors = validate(&draft("A", "a@b.com", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Age), Some("Age is required"));
    }

    #[test]
    fn zero_age_fails_age_only() {
        let errors = validate(&draft("A", "a@b.com", "0")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Age), Some("Age must be greater than 0"));
    }

    #[test]
    fn negative_age_is_rejected() {
        let errors = validate(&draft("A", "a@b.com", "-3")).unwrap_err();
        assert_eq!(errors.message(Field::Age), Some("Age must be greater than 0"));
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let errors = validate(&draft("A", "a@b.com", "thirty")).unwrap_err();
        assert_eq!(errors.message(Field::Age), Some("Age must be greater than 0"));
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate(&Draft::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Age]);
    }

    #[test]
    fn payload_fields_are_trimmed() {
        let input = validate(&draft("  Alice  ", " alice@x.com ", "30")).unwrap();
        assert_eq!(input.name, "Alice");
        assert_eq!(input.email, "alice@x.com");
    }

    #[test]
    fn field_wire_names() {
        assert_eq!(Field::Name.as_str(), "name");
        assert_eq!(Field::Email.as_str(), "email");
        assert_eq!(Field::Age.as_str(), "age");
    }
}
