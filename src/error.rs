//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use crate::models::FieldErrors;
use thiserror::Error;

/// Errors that can occur when operating on the contact store or its dialogs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact has the given id
    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    /// The open form failed validation; nothing was committed
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The operation needs an open dialog
    #[error("No dialog is open")]
    NoOpenDialog,

    /// The open dialog does not accept this operation
    #[error("Open dialog is {open}, expected {expected}")]
    WrongDialog {
        open: &'static str,
        expected: &'static str,
    },

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
