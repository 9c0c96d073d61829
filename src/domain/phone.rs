//! Phone number normalization.
//!
//! Stored phone numbers have the shape `+<country code><local number>`, where the
//! country code is 1-3 digits and the local number is exactly 10 digits. The form
//! edits the two parts separately; these helpers split, compose and validate them.

use super::errors::{FieldCheck, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Country code used when none can be recovered from a stored number.
pub const DEFAULT_COUNTRY_CODE: &str = "91";

/// Maximum number of digits in a country code.
pub const MAX_COUNTRY_CODE_DIGITS: usize = 3;

/// Number of digits in a local number.
pub const LOCAL_NUMBER_DIGITS: usize = 10;

static COMPOSED_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?([0-9]{1,3})?([0-9]{10})$").expect("Failed to compile phone regex")
});

/// The two editable halves of a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParts {
    /// Country code digits, without the leading '+'
    pub country_code: String,

    /// Local number digits
    pub local: String,
}

/// Strip every non-digit character, preserving order.
///
/// # Example
///
/// ```
/// use contact_book::domain::phone::only_digits;
///
/// assert_eq!(only_digits("+91 (987) 654-3210"), "919876543210");
/// assert_eq!(only_digits("no digits"), "");
/// ```
pub fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep at most `max` leading digits of `s` after stripping non-digits.
fn leading_digits(s: &str, max: usize) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Split a stored phone number into country code and local number.
///
/// A well-formed number (`+` optional, 1-3 digit country code, 10 digit local part)
/// is split exactly. Anything else falls back to treating the last 10 digits as the
/// local number and up to 3 digits before them as the country code. The country code
/// defaults to [`DEFAULT_COUNTRY_CODE`] when nothing is left for it.
pub fn split_phone(full: &str) -> PhoneParts {
    if let Some(caps) = COMPOSED_PHONE_RE.captures(full) {
        let country_code = caps
            .get(1)
            .map_or(DEFAULT_COUNTRY_CODE, |m| m.as_str())
            .to_string();
        let local = caps.get(2).map_or("", |m| m.as_str()).to_string();
        return PhoneParts {
            country_code,
            local,
        };
    }

    let digits = only_digits(full);
    let split_at = digits.len().saturating_sub(LOCAL_NUMBER_DIGITS);
    let (prefix, local) = digits.split_at(split_at);

    let country_code = if prefix.is_empty() {
        DEFAULT_COUNTRY_CODE.to_string()
    } else {
        prefix.chars().take(MAX_COUNTRY_CODE_DIGITS).collect()
    };

    PhoneParts {
        country_code,
        local: local.to_string(),
    }
}

/// Compose a stored phone number from its parts.
///
/// No validation happens here; the parts are only truncated to their maximum
/// lengths after stripping non-digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::phone::compose_phone;
///
/// assert_eq!(compose_phone("91", "9876543210"), "+919876543210");
/// ```
pub fn compose_phone(country_code: &str, local: &str) -> String {
    format!(
        "+{}{}",
        leading_digits(country_code, MAX_COUNTRY_CODE_DIGITS),
        leading_digits(local, LOCAL_NUMBER_DIGITS)
    )
}

/// Normalize a country code to at most 3 digits; an empty result is `Required`.
pub fn validate_phone_cc(country_code: &str) -> FieldCheck {
    let value = leading_digits(country_code, MAX_COUNTRY_CODE_DIGITS);
    let error = value.is_empty().then_some(ValidationError::Required);
    FieldCheck::new(value, error)
}

/// Normalize a local number to at most 10 digits.
///
/// A partially typed number is `EnterTenDigits`. An empty number passes here; the
/// submit path decides whether it is required.
pub fn validate_phone_local(local: &str) -> FieldCheck {
    let value = leading_digits(local, LOCAL_NUMBER_DIGITS);
    let error = (!value.is_empty() && value.len() < LOCAL_NUMBER_DIGITS)
        .then_some(ValidationError::EnterTenDigits);
    FieldCheck::new(value, error)
}
