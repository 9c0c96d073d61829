//! Contact service layer.
//!
//! Listing, one-shot creation and the per-contact actions (delete, favourite,
//! expand).

use super::SharedSession;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{ContactView, Field};
use crate::store::SessionSnapshot;
use async_trait::async_trait;
use tracing::{debug, info};

/// Parameters for adding a contact in one call.
#[derive(Debug, Clone, Default)]
pub struct NewContactParams {
    pub name: String,
    /// Country code; the configured default is used when absent
    pub phone_cc: Option<String>,
    pub phone_local: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub group: Option<String>,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Visible contacts plus the view state they were computed from.
    async fn list_contacts(&self) -> SessionSnapshot;

    /// One contact by id.
    async fn get_contact(&self, id: ContactId) -> StoreResult<ContactView>;

    /// Validate and add a contact without opening a dialog.
    async fn add_contact(&self, params: NewContactParams) -> StoreResult<ContactView>;

    /// Remove a contact. Unknown ids are ignored; returns whether one was removed.
    async fn delete_contact(&self, id: ContactId) -> bool;

    /// Flip the favourite flag; `None` if the id is unknown.
    async fn toggle_favourite(&self, id: ContactId) -> Option<bool>;

    /// Toggle the expanded contact; returns the id expanded afterwards.
    async fn toggle_expand(&self, id: ContactId) -> Option<ContactId>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    session: SharedSession,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        let snapshot = session.snapshot();
        debug!(
            visible = snapshot.contacts.len(),
            total = snapshot.total_contacts,
            filter = %snapshot.filter,
            "Listed contacts"
        );
        snapshot
    }

    async fn get_contact(&self, id: ContactId) -> StoreResult<ContactView> {
        self.session.read().await.contact(id)
    }

    async fn add_contact(&self, params: NewContactParams) -> StoreResult<ContactView> {
        let mut session = self.session.write().await;

        let mut draft = session.new_draft();
        draft.set_field(Field::Name, &params.name);
        if let Some(cc) = params.phone_cc.as_deref() {
            draft.set_field(Field::PhoneCc, cc);
        }
        draft.set_field(Field::PhoneLocal, &params.phone_local);
        draft.set_field(Field::Email, params.email.as_deref().unwrap_or(""));
        draft.set_field(Field::Notes, params.notes.as_deref().unwrap_or(""));
        draft.set_field(Field::Group, params.group.as_deref().unwrap_or(""));

        let id = session.add_contact(&draft).map_err(|e| {
            debug!("Rejected new contact: {}", e);
            e
        })?;
        info!(id = %id, "Contact added");

        session.contact(id)
    }

    async fn delete_contact(&self, id: ContactId) -> bool {
        let removed = self.session.write().await.delete_contact(id);
        if removed {
            info!(id = %id, "Contact deleted");
        } else {
            debug!(id = %id, "Delete ignored, no such contact");
        }
        removed
    }

    async fn toggle_favourite(&self, id: ContactId) -> Option<bool> {
        let favourite = self.session.write().await.toggle_favourite(id);
        debug!(id = %id, ?favourite, "Toggled favourite");
        favourite
    }

    async fn toggle_expand(&self, id: ContactId) -> Option<ContactId> {
        let expanded = self.session.write().await.toggle_expand(id);
        debug!(id = %id, ?expanded, "Toggled expansion");
        expanded
    }
}
