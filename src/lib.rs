//! Contact Book - an in-memory contact manager exposed over the Model Context Protocol.
//!
//! Contacts are entered through validated forms: names are required, phone numbers
//! are composed from a 1-3 digit country code and a 10 digit local number, and email
//! is optional but must contain '@'. The list can be filtered (all, favourites or a
//! group) and searched, and contacts can be starred, expanded and grouped.
//!
//! # Architecture
//!
//! - **domain**: Contact IDs, phone normalization and field validators
//! - **models**: Contacts, drafts, field errors, filter and theme
//! - **store**: The contact collection and the session controller around it
//! - **services**: Async service layer over a shared session
//! - **server**: MCP protocol server
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, ValidationError};
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactDraft, ContactView, Field, FieldErrors, Filter, Theme};
pub use server::ContactBookServer;
pub use store::{ContactStore, Dialog, SaveOutcome, Session, SessionSnapshot};
