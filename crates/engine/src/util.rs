//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation and mapping logic so the engine enforces consistent invariants.

use sea_orm::{ActiveValue, Value};

use crate::ValidationErrors;

pub(crate) const MAX_TEXT_LEN: usize = 255;
pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Trim a required display name, recording an error when it is empty or too long.
pub(crate) fn check_name(errors: &mut ValidationErrors, field: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("The {field} field must not be empty."));
    } else if trimmed.chars().count() > MAX_TEXT_LEN {
        errors.add(
            field,
            format!("The {field} field must not be greater than {MAX_TEXT_LEN} characters."),
        );
    }
    trimmed.to_string()
}

/// Normalize an email address (trimmed, lowercase) and check its shape.
pub(crate) fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) -> String {
    let email = value.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        errors.add(field, format!("The {field} field must be a valid email address."));
    } else if email.chars().count() > MAX_TEXT_LEN {
        errors.add(
            field,
            format!("The {field} field must not be greater than {MAX_TEXT_LEN} characters."),
        );
    }
    email
}

pub(crate) fn check_password(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            field,
            format!("The {field} field must be at least {MIN_PASSWORD_LEN} characters."),
        );
    }
}

pub(crate) fn check_non_negative(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value < 0 {
        errors.add(field, format!("The {field} field must be at least 0."));
    }
}

/// Stage `next` into `slot` when it differs from the stored value.
///
/// Returns whether the column changed, so callers can skip no-op writes.
pub(crate) fn assign<V>(slot: &mut ActiveValue<V>, current: &V, next: Option<V>) -> bool
where
    V: Into<Value> + PartialEq,
{
    match next {
        Some(value) if value != *current => {
            *slot = ActiveValue::Set(value);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let mut errors = ValidationErrors::new();
        assert_eq!(check_name(&mut errors, "name", "  Food "), "Food");
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_and_long_names_are_rejected() {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", "   ");
        assert!(errors.contains("name"));

        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", &"x".repeat(MAX_TEXT_LEN + 1));
        assert!(errors.contains("name"));

        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", &"x".repeat(MAX_TEXT_LEN));
        assert!(errors.is_empty());
    }

    #[test]
    fn email_is_normalized() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            check_email(&mut errors, "email", " John@Example.com "),
            "john@example.com"
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for value in ["john", "john@", "@example.com", "john@example", "jo hn@example.com", "a@b@c.com"] {
            let mut errors = ValidationErrors::new();
            check_email(&mut errors, "email", value);
            assert!(errors.contains("email"), "{value} should be rejected");
        }
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut errors = ValidationErrors::new();
        check_password(&mut errors, "password", "short");
        assert!(errors.contains("password"));

        let mut errors = ValidationErrors::new();
        check_password(&mut errors, "password", "long enough");
        assert!(errors.is_empty());
    }

    #[test]
    fn assign_skips_equal_values() {
        let mut slot = ActiveValue::Unchanged(10_i64);
        assert!(!assign(&mut slot, &10, Some(10)));
        assert!(!assign(&mut slot, &10, None));
        assert!(matches!(slot, ActiveValue::Unchanged(10)));

        assert!(assign(&mut slot, &10, Some(20)));
        assert!(matches!(slot, ActiveValue::Set(20)));
    }
}
