//! Application service layer.
//!
//! Services are the async boundary between the MCP handlers and the session. They
//! share one [`Session`] behind a `tokio` lock; each call takes the lock once, so
//! every operation is applied atomically.

mod contact_service;
mod dialog_service;
mod group_service;
mod view_service;

pub use contact_service::{ContactService, ContactServiceImpl, NewContactParams};
pub use dialog_service::{DialogService, DialogServiceImpl};
pub use group_service::{GroupService, GroupServiceImpl};
pub use view_service::{ViewService, ViewServiceImpl};

use crate::store::Session;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The session shared by all services.
pub type SharedSession = Arc<RwLock<Session>>;

/// Wrap a session for sharing between services.
pub fn share(session: Session) -> SharedSession {
    Arc::new(RwLock::new(session))
}
