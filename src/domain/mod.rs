//! Domain value objects and validators.
//!
//! Contact IDs, phone number normalization and the per-field validators used by
//! the add/edit forms. Everything here is pure.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::validate_email;
pub use errors::{FieldCheck, ValidationError};
pub use phone::{
    compose_phone, only_digits, split_phone, validate_phone_cc, validate_phone_local, PhoneParts,
    DEFAULT_COUNTRY_CODE,
};
