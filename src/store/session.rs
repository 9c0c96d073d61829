//! Session controller.
//!
//! A `Session` is the single owner of the contact store plus the view state around
//! it: the active filter, the search text, the theme and whichever dialog is open.
//! The surface reads through the query methods and changes state only through the
//! mutation methods here.

use super::seed::sample_store;
use super::ContactStore;
use crate::config::Config;
use crate::domain::{ContactId, ValidationError, DEFAULT_COUNTRY_CODE};
use crate::error::{StoreError, StoreResult};
use crate::models::{
    ContactDraft, ContactView, DraftForm, Field, FieldErrors, Filter, Theme,
};
use serde::Serialize;

/// The modal dialog currently open, if any. Opening one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dialog {
    #[default]
    Closed,
    AddContact(DraftForm),
    EditContact {
        id: ContactId,
        form: DraftForm,
    },
    NewGroup {
        name: String,
        error: Option<ValidationError>,
    },
}

impl Dialog {
    fn label(&self) -> &'static str {
        match self {
            Dialog::Closed => "closed",
            Dialog::AddContact(_) => "add contact",
            Dialog::EditContact { .. } => "edit contact",
            Dialog::NewGroup { .. } => "new group",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }
}

/// What a successful dialog save did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    Added { id: ContactId },
    Updated { id: ContactId },
    GroupAdded { name: String },
    GroupUnchanged { name: String },
}

/// Everything the list view renders.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub contacts: Vec<ContactView>,
    pub total_contacts: usize,
    pub groups: Vec<String>,
    pub filter: Filter,
    pub search: String,
    pub theme: Theme,
    pub dialog: Dialog,
}

/// The contact book state for one user session.
#[derive(Debug, Clone)]
pub struct Session {
    store: ContactStore,
    filter: Filter,
    search: String,
    theme: Theme,
    dialog: Dialog,
    default_country_code: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ContactStore::new())
    }
}

impl Session {
    /// Wrap a store with default view state.
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            filter: Filter::All,
            search: String::new(),
            theme: Theme::default(),
            dialog: Dialog::Closed,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Build the initial session described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_samples {
            sample_store(&config.groups)
        } else {
            ContactStore::with_groups(&config.groups)
        };

        let mut session = Self::new(store);
        session.theme = config.theme;
        session.default_country_code = config.default_country_code.clone();
        session
    }

    // ==================== Queries ====================

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Contacts matching the current filter and search.
    pub fn visible_contacts(&self) -> Vec<ContactView> {
        self.store.visible_contacts(&self.filter, &self.search)
    }

    /// One contact by id.
    pub fn contact(&self, id: ContactId) -> StoreResult<ContactView> {
        self.store.view(id).ok_or(StoreError::ContactNotFound(id))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            contacts: self.visible_contacts(),
            total_contacts: self.store.len(),
            groups: self.store.groups().to_vec(),
            filter: self.filter.clone(),
            search: self.search.clone(),
            theme: self.theme,
            dialog: self.dialog.clone(),
        }
    }

    // ==================== View state ====================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ==================== Contact actions ====================

    pub fn delete_contact(&mut self, id: ContactId) -> bool {
        self.store.delete_contact(id)
    }

    pub fn toggle_favourite(&mut self, id: ContactId) -> Option<bool> {
        self.store.toggle_favourite(id)
    }

    pub fn toggle_expand(&mut self, id: ContactId) -> Option<ContactId> {
        self.store.toggle_expand(id)
    }

    pub fn add_group(&mut self, name: &str) -> bool {
        self.store.add_group(name)
    }

    /// Validate and commit a complete draft without going through a dialog.
    pub fn add_contact(&mut self, draft: &ContactDraft) -> StoreResult<ContactId> {
        let valid = draft.validate().map_err(StoreError::Validation)?;
        Ok(self.store.add_contact(valid))
    }

    /// An empty draft with the configured country code.
    pub fn new_draft(&self) -> ContactDraft {
        ContactDraft::new(&self.default_country_code)
    }

    // ==================== Dialogs ====================

    /// Open the add dialog with an empty draft.
    pub fn open_add_dialog(&mut self) -> &Dialog {
        self.dialog = Dialog::AddContact(DraftForm::new(self.new_draft()));
        &self.dialog
    }

    /// Open the edit dialog populated from an existing contact.
    pub fn open_edit_dialog(&mut self, id: ContactId) -> StoreResult<&Dialog> {
        let contact = self.store.get(id).ok_or(StoreError::ContactNotFound(id))?;
        let form = DraftForm::new(ContactDraft::from_contact(contact));
        self.dialog = Dialog::EditContact { id, form };
        Ok(&self.dialog)
    }

    /// Open the new-group dialog with an empty name.
    pub fn open_group_dialog(&mut self) -> &Dialog {
        self.dialog = Dialog::NewGroup {
            name: String::new(),
            error: None,
        };
        &self.dialog
    }

    /// Set a field on the open add/edit form.
    pub fn set_draft_field(
        &mut self,
        field: Field,
        value: &str,
    ) -> StoreResult<Option<ValidationError>> {
        match &mut self.dialog {
            Dialog::AddContact(form) | Dialog::EditContact { form, .. } => {
                Ok(form.set_field(field, value))
            }
            Dialog::Closed => Err(StoreError::NoOpenDialog),
            other => Err(StoreError::WrongDialog {
                open: other.label(),
                expected: "contact form",
            }),
        }
    }

    /// Set the name typed into the open new-group dialog.
    pub fn set_group_name(&mut self, value: &str) -> StoreResult<()> {
        match &mut self.dialog {
            Dialog::NewGroup { name, error } => {
                *name = value.to_string();
                *error = None;
                Ok(())
            }
            Dialog::Closed => Err(StoreError::NoOpenDialog),
            other => Err(StoreError::WrongDialog {
                open: other.label(),
                expected: "new group",
            }),
        }
    }

    /// Submit the open dialog.
    ///
    /// On validation failure the dialog stays open with its errors set and nothing
    /// is committed. Otherwise the change is committed and the dialog closes.
    pub fn save_dialog(&mut self) -> StoreResult<SaveOutcome> {
        match std::mem::take(&mut self.dialog) {
            Dialog::Closed => Err(StoreError::NoOpenDialog),
            Dialog::AddContact(mut form) => match form.submit() {
                Ok(valid) => {
                    let id = self.store.add_contact(valid);
                    Ok(SaveOutcome::Added { id })
                }
                Err(errors) => {
                    self.dialog = Dialog::AddContact(form);
                    Err(StoreError::Validation(errors))
                }
            },
            Dialog::EditContact { id, mut form } => match form.submit() {
                Ok(valid) => {
                    // A contact deleted while its dialog was open closes the dialog
                    self.store.update_contact(id, valid)?;
                    Ok(SaveOutcome::Updated { id })
                }
                Err(errors) => {
                    self.dialog = Dialog::EditContact { id, form };
                    Err(StoreError::Validation(errors))
                }
            },
            Dialog::NewGroup { name, .. } => {
                let trimmed = name.trim().to_string();
                if trimmed.is_empty() {
                    let mut errors = FieldErrors::new();
                    errors.set(Field::Group, Some(ValidationError::Required));
                    self.dialog = Dialog::NewGroup {
                        name,
                        error: Some(ValidationError::Required),
                    };
                    return Err(StoreError::Validation(errors));
                }

                if self.store.add_group(&trimmed) {
                    Ok(SaveOutcome::GroupAdded { name: trimmed })
                } else {
                    Ok(SaveOutcome::GroupUnchanged { name: trimmed })
                }
            }
        }
    }

    /// Close the open dialog, discarding its draft. Returns whether one was open.
    pub fn cancel_dialog(&mut self) -> bool {
        std::mem::take(&mut self.dialog).is_open()
    }
}
