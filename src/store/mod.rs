//! In-memory state: the contact store and the session controller around it.

mod contact_store;
pub mod seed;
mod session;

pub use contact_store::ContactStore;
pub use session::{Dialog, SaveOutcome, Session, SessionSnapshot};
