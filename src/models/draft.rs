//! Add/edit form drafts.
//!
//! A draft is the staging copy of a contact while a dialog is open. Each edit to a
//! phone or email field is normalized and validated immediately; `validate` runs the
//! full submit-time check and produces the values to commit.

use super::contact::{Contact, ValidatedContact};
use crate::domain::{
    compose_phone, split_phone, validate_email, validate_phone_cc, validate_phone_local,
    ValidationError, DEFAULT_COUNTRY_CODE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    PhoneCc,
    PhoneLocal,
    Email,
    Notes,
    Group,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Field::Name),
            "phone_cc" | "phonecc" | "country_code" => Ok(Field::PhoneCc),
            "phone_local" | "phonelocal" | "phone" => Ok(Field::PhoneLocal),
            "email" => Ok(Field::Email),
            "notes" => Ok(Field::Notes),
            "group" => Ok(Field::Group),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::PhoneCc => "phone_cc",
            Field::PhoneLocal => "phone_local",
            Field::Email => "email",
            Field::Notes => "notes",
            Field::Group => "group",
        };
        f.write_str(name)
    }
}

/// Per-field validation errors for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or clear the error for a field.
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match error {
            Some(err) => {
                self.0.insert(field, err);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, err)| format!("{}: {}", field, err))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// The staging copy of a contact's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone_cc: String,
    pub phone_local: String,
    pub email: String,
    pub notes: String,
    pub group: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }
}

impl ContactDraft {
    /// An empty draft with the given country code pre-filled.
    pub fn new(default_country_code: &str) -> Self {
        Self {
            name: String::new(),
            phone_cc: default_country_code.to_string(),
            phone_local: String::new(),
            email: String::new(),
            notes: String::new(),
            group: String::new(),
        }
    }

    /// A draft populated from an existing contact, splitting its phone number.
    pub fn from_contact(contact: &Contact) -> Self {
        let parts = split_phone(&contact.phone);
        Self {
            name: contact.name.clone(),
            phone_cc: parts.country_code,
            phone_local: parts.local,
            email: contact.email.clone(),
            notes: contact.notes.clone(),
            group: contact.group.clone(),
        }
    }

    /// Set a field the way typing into it would.
    ///
    /// Phone fields keep only their normalized digits. Returns the field's current
    /// validation error; fields without a validator always return `None`.
    pub fn set_field(&mut self, field: Field, value: &str) -> Option<ValidationError> {
        match field {
            Field::PhoneCc => {
                let check = validate_phone_cc(value);
                self.phone_cc = check.value;
                check.error
            }
            Field::PhoneLocal => {
                let check = validate_phone_local(value);
                self.phone_local = check.value;
                check.error
            }
            Field::Email => {
                let check = validate_email(value);
                self.email = check.value;
                check.error
            }
            Field::Name => {
                self.name = value.to_string();
                None
            }
            Field::Notes => {
                self.notes = value.to_string();
                None
            }
            Field::Group => {
                self.group = value.to_string();
                None
            }
        }
    }

    /// Run the submit-time validation.
    ///
    /// On success returns trimmed values with the phone composed. On failure returns
    /// every field error; nothing is partially accepted.
    pub fn validate(&self) -> Result<ValidatedContact, FieldErrors> {
        let cc = validate_phone_cc(&self.phone_cc);
        let local = validate_phone_local(&self.phone_local);
        let email = validate_email(&self.email);

        let mut errors = FieldErrors::new();
        errors.set(Field::PhoneCc, cc.error);
        errors.set(Field::PhoneLocal, local.error);
        errors.set(Field::Email, email.error);

        // Submit requires a phone even though typing allows the field to be empty
        if local.value.is_empty() {
            errors.set(Field::PhoneLocal, Some(ValidationError::Required));
        }

        let name = self.name.trim();
        if name.is_empty() {
            errors.set(Field::Name, Some(ValidationError::Required));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedContact {
            name: name.to_string(),
            phone: compose_phone(&cc.value, &local.value),
            email: email.value.trim().to_string(),
            notes: self.notes.trim().to_string(),
            group: self.group.trim().to_string(),
        })
    }
}

/// A draft together with the errors currently shown on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftForm {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
}

impl DraftForm {
    pub fn new(draft: ContactDraft) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
        }
    }

    /// Set a field and refresh its error entry.
    pub fn set_field(&mut self, field: Field, value: &str) -> Option<ValidationError> {
        let error = self.draft.set_field(field, value);
        if matches!(field, Field::PhoneCc | Field::PhoneLocal | Field::Email) {
            self.errors.set(field, error);
        }
        error
    }

    /// Validate for submission, replacing the shown errors with the result.
    pub fn submit(&mut self) -> Result<ValidatedContact, FieldErrors> {
        match self.draft.validate() {
            Ok(valid) => {
                self.errors = FieldErrors::new();
                Ok(valid)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
