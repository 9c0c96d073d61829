//! Dialog service layer.
//!
//! Drives the add, edit and new-group dialogs: open, edit fields, save, cancel.

use super::SharedSession;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::Field;
use crate::store::{Dialog, SaveOutcome};
use async_trait::async_trait;
use tracing::{debug, info};

/// Dialog service trait.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// The dialog currently open.
    async fn current(&self) -> Dialog;

    /// Open the add dialog with an empty draft.
    async fn open_add(&self) -> Dialog;

    /// Open the edit dialog for a contact.
    async fn open_edit(&self, id: ContactId) -> StoreResult<Dialog>;

    /// Open the new-group dialog.
    async fn open_group(&self) -> Dialog;

    /// Set one field of the open add/edit form; returns the updated dialog.
    async fn set_draft_field(&self, field: Field, value: String) -> StoreResult<Dialog>;

    /// Set the name in the open new-group dialog.
    async fn set_group_name(&self, name: String) -> StoreResult<Dialog>;

    /// Validate and commit the open dialog.
    async fn save(&self) -> StoreResult<SaveOutcome>;

    /// Discard the open dialog. Returns whether one was open.
    async fn cancel(&self) -> bool;
}

/// Default implementation of DialogService.
pub struct DialogServiceImpl {
    session: SharedSession,
}

impl DialogServiceImpl {
    /// Create a new dialog service.
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl DialogService for DialogServiceImpl {
    async fn current(&self) -> Dialog {
        self.session.read().await.dialog().clone()
    }

    async fn open_add(&self) -> Dialog {
        debug!("Opening add dialog");
        self.session.write().await.open_add_dialog().clone()
    }

    async fn open_edit(&self, id: ContactId) -> StoreResult<Dialog> {
        debug!(id = %id, "Opening edit dialog");
        let mut session = self.session.write().await;
        session.open_edit_dialog(id).cloned()
    }

    async fn open_group(&self) -> Dialog {
        debug!("Opening new group dialog");
        self.session.write().await.open_group_dialog().clone()
    }

    async fn set_draft_field(&self, field: Field, value: String) -> StoreResult<Dialog> {
        let mut session = self.session.write().await;
        let error = session.set_draft_field(field, &value)?;
        debug!(field = %field, ?error, "Draft field updated");
        Ok(session.dialog().clone())
    }

    async fn set_group_name(&self, name: String) -> StoreResult<Dialog> {
        let mut session = self.session.write().await;
        session.set_group_name(&name)?;
        Ok(session.dialog().clone())
    }

    async fn save(&self) -> StoreResult<SaveOutcome> {
        let outcome = self.session.write().await.save_dialog().map_err(|e| {
            debug!("Dialog save rejected: {}", e);
            e
        })?;
        info!(?outcome, "Dialog saved");
        Ok(outcome)
    }

    async fn cancel(&self) -> bool {
        let was_open = self.session.write().await.cancel_dialog();
        debug!(was_open, "Dialog cancelled");
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::services::share;
    use crate::store::Session;

    #[tokio::test]
    async fn test_dialog_round_trip() {
        let service = DialogServiceImpl::new(share(Session::default()));

        assert!(matches!(service.open_add().await, Dialog::AddContact(_)));
        service.set_draft_field(Field::Name, "Zara".to_string()).await.unwrap();
        service
            .set_draft_field(Field::PhoneLocal, "98765 43210".to_string())
            .await
            .unwrap();

        let outcome = service.save().await.unwrap();
        assert_eq!(outcome, SaveOutcome::Added { id: ContactId::new(1) });
        assert_eq!(service.current().await, Dialog::Closed);
    }

    #[tokio::test]
    async fn test_save_without_dialog() {
        let service = DialogServiceImpl::new(share(Session::default()));
        assert_eq!(service.save().await, Err(StoreError::NoOpenDialog));
        assert!(!service.cancel().await);
    }

    #[tokio::test]
    async fn test_group_dialog() {
        let service = DialogServiceImpl::new(share(Session::default()));
        service.open_group().await;
        service.set_group_name("Family".to_string()).await.unwrap();
        assert_eq!(
            service.save().await.unwrap(),
            SaveOutcome::GroupAdded {
                name: "Family".to_string()
            }
        );
    }
}
