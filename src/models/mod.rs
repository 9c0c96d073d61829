//! Data models for the contact book.

pub mod contact;
pub mod draft;
pub mod filter;
pub mod theme;

pub use contact::{Contact, ContactView, ValidatedContact};
pub use draft::{ContactDraft, DraftForm, Field, FieldErrors};
pub use filter::Filter;
pub use theme::Theme;
