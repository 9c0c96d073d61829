//! Field-level validation errors.

use serde::{Serialize, Serializer};
use std::fmt;

/// A validation failure attached to a single form field.
///
/// The `Display` output is the short message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field must not be empty.
    Required,

    /// A local phone number was started but has fewer than ten digits.
    EnterTenDigits,

    /// A non-empty email address lacks an '@'.
    MustContainAt,
}

impl ValidationError {
    /// The message shown next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::EnterTenDigits => "Enter 10 digits",
            Self::MustContainAt => "Must contain @",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

// Serialized as its message so error maps read naturally in JSON
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}

/// The outcome of running a field validator: the normalized value plus an optional error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Normalized field value
    pub value: String,

    /// Validation error, if any
    pub error: Option<ValidationError>,
}

impl FieldCheck {
    pub(crate) fn new(value: String, error: Option<ValidationError>) -> Self {
        Self { value, error }
    }

    /// Whether the value passed validation.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
