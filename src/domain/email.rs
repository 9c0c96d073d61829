//! Email field validation.
//!
//! Email is optional. The only rule for a non-empty address is that it contains '@'.

use super::errors::{FieldCheck, ValidationError};

/// Validate an email field. The value is passed through unchanged.
///
/// # Example
///
/// ```
/// use contact_book::domain::email::validate_email;
///
/// assert!(validate_email("").is_ok());
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(!validate_email("nope").is_ok());
/// ```
pub fn validate_email(email: &str) -> FieldCheck {
    let ok = email.is_empty() || email.contains('@');
    let error = (!ok).then_some(ValidationError::MustContainAt);
    FieldCheck::new(email.to_string(), error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_empty_is_valid() {
        assert!(validate_email("").is_ok());
    }

    #[test]
    fn test_email_requires_at() {
        assert_eq!(validate_email("nope").error, Some(ValidationError::MustContainAt));
        assert!(validate_email("a@b").is_ok());
        assert!(validate_email("@").is_ok());
    }

    #[test]
    fn test_email_value_unchanged() {
        assert_eq!(validate_email("  User@Example.com ").value, "  User@Example.com ");
    }
}
