//! The contact collection and group list.
//!
//! `ContactStore` owns every committed contact, the ordered set of group names and
//! the id of the single expanded contact. Mutations take already-validated values;
//! form handling lives in [`crate::models::draft`].

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactView, Filter, ValidatedContact};

/// In-memory contact collection.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    groups: Vec<String>,
    expanded_id: Option<ContactId>,
}

impl ContactStore {
    /// Create an empty store with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given groups, dropping blanks and duplicates.
    pub fn with_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for group in groups {
            store.add_group(group.as_ref());
        }
        store
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// All group names in insertion order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// The currently expanded contact, if any.
    pub fn expanded_id(&self) -> Option<ContactId> {
        self.expanded_id
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by id.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Look up a contact by id along with its expansion state.
    pub fn view(&self, id: ContactId) -> Option<ContactView> {
        self.get(id).map(|c| self.to_view(c))
    }

    fn to_view(&self, contact: &Contact) -> ContactView {
        ContactView {
            contact: contact.clone(),
            expanded: self.expanded_id == Some(contact.id),
        }
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// The id the next added contact will receive.
    pub fn next_id(&self) -> ContactId {
        ContactId::next_after(self.contacts.iter().map(|c| c.id))
    }

    /// Append a new contact and register its group if it is new.
    pub fn add_contact(&mut self, valid: ValidatedContact) -> ContactId {
        let id = self.next_id();
        self.register_group(&valid.group);
        self.contacts.push(Contact {
            id,
            name: valid.name,
            phone: valid.phone,
            email: valid.email,
            notes: valid.notes,
            group: valid.group,
            favourite: false,
        });
        id
    }

    /// Replace the editable fields of an existing contact.
    ///
    /// The id, favourite flag and expansion state are left untouched.
    pub fn update_contact(&mut self, id: ContactId, valid: ValidatedContact) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::ContactNotFound(id))?;
        self.register_group(&valid.group);

        let contact = &mut self.contacts[index];
        contact.name = valid.name;
        contact.phone = valid.phone;
        contact.email = valid.email;
        contact.notes = valid.notes;
        contact.group = valid.group;
        Ok(())
    }

    /// Remove a contact. Returns whether anything was removed.
    pub fn delete_contact(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
        }
        self.contacts.len() != before
    }

    /// Flip a contact's favourite flag. Returns the new value, or `None` if no
    /// contact has that id.
    pub fn toggle_favourite(&mut self, id: ContactId) -> Option<bool> {
        let index = self.position(id)?;
        let contact = &mut self.contacts[index];
        contact.favourite = !contact.favourite;
        Some(contact.favourite)
    }

    /// Expand a contact, collapsing any other; toggling the expanded contact
    /// collapses it. An unknown id collapses everything.
    ///
    /// Returns the id that is expanded afterwards.
    pub fn toggle_expand(&mut self, id: ContactId) -> Option<ContactId> {
        self.expanded_id = match self.position(id) {
            Some(_) if self.expanded_id != Some(id) => Some(id),
            _ => None,
        };
        self.expanded_id
    }

    /// Append a group name if it is non-empty and not already present.
    ///
    /// Returns whether the group was added.
    pub fn add_group(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.has_group(name) {
            return false;
        }
        self.groups.push(name.to_string());
        true
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    fn register_group(&mut self, group: &str) {
        if self.add_group(group) {
            tracing::debug!(group = %group, "Registered new group from contact");
        }
    }

    /// The contacts to show for a filter and search text, in collection order.
    ///
    /// The filter applies first; a non-empty search then narrows the result by a
    /// case-insensitive substring match on name, email or phone.
    pub fn visible_contacts(&self, filter: &Filter, search: &str) -> Vec<ContactView> {
        let needle = search.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| match filter {
                Filter::All => true,
                Filter::Favourites => c.favourite,
                Filter::Group(name) => &c.group == name,
            })
            .filter(|c| needle.is_empty() || c.matches_search(&needle))
            .map(|c| self.to_view(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(name: &str, group: &str) -> ValidatedContact {
        ValidatedContact {
            name: name.to_string(),
            phone: "+919876543210".to_string(),
            email: String::new(),
            notes: String::new(),
            group: group.to_string(),
        }
    }

    #[test]
    fn test_ids_start_at_one_and_follow_max() {
        let mut store = ContactStore::new();
        assert_eq!(store.add_contact(valid("A", "")), ContactId::new(1));
        assert_eq!(store.add_contact(valid("B", "")), ContactId::new(2));
        assert_eq!(store.add_contact(valid("C", "")), ContactId::new(3));

        store.delete_contact(ContactId::new(2));
        assert_eq!(store.add_contact(valid("D", "")), ContactId::new(4));

        store.delete_contact(ContactId::new(4));
        assert_eq!(store.next_id(), ContactId::new(4));
    }

    #[test]
    fn test_add_registers_new_group_once() {
        let mut store = ContactStore::with_groups(["Friends", "Work"]);
        store.add_contact(valid("A", "Climbing"));
        store.add_contact(valid("B", "Climbing"));
        store.add_contact(valid("C", "Work"));
        assert_eq!(store.groups(), ["Friends", "Work", "Climbing"]);
    }

    #[test]
    fn test_update_keeps_id_and_favourite() {
        let mut store = ContactStore::new();
        let id = store.add_contact(valid("A", ""));
        store.toggle_favourite(id);
        store.toggle_expand(id);

        store.update_contact(id, valid("Renamed", "Gym")).unwrap();
        let contact = store.get(id).unwrap();
        assert_eq!(contact.name, "Renamed");
        assert!(contact.favourite);
        assert_eq!(store.expanded_id(), Some(id));
        assert!(store.has_group("Gym"));
    }

    #[test]
    fn test_update_missing_contact() {
        let mut store = ContactStore::new();
        let err = store.update_contact(ContactId::new(5), valid("A", "")).unwrap_err();
        assert_eq!(err, StoreError::ContactNotFound(ContactId::new(5)));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = ContactStore::new();
        store.add_contact(valid("A", ""));
        assert!(!store.delete_contact(ContactId::new(99)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_clears_expansion() {
        let mut store = ContactStore::new();
        let id = store.add_contact(valid("A", ""));
        store.toggle_expand(id);
        assert!(store.delete_contact(id));
        assert_eq!(store.expanded_id(), None);
    }

    #[test]
    fn test_toggle_favourite_only_touches_target() {
        let mut store = ContactStore::new();
        let a = store.add_contact(valid("A", ""));
        let b = store.add_contact(valid("B", ""));
        assert_eq!(store.toggle_favourite(a), Some(true));
        assert!(!store.get(b).unwrap().favourite);
        assert_eq!(store.toggle_favourite(a), Some(false));
        assert_eq!(store.toggle_favourite(ContactId::new(42)), None);
    }

    #[test]
    fn test_toggle_expand_single_selection() {
        let mut store = ContactStore::new();
        let a = store.add_contact(valid("A", ""));
        let b = store.add_contact(valid("B", ""));

        assert_eq!(store.toggle_expand(b), Some(b));
        assert_eq!(store.toggle_expand(a), Some(a));
        assert!(!store.view(b).unwrap().expanded);
        assert!(store.view(a).unwrap().expanded);

        assert_eq!(store.toggle_expand(a), None);
        assert!(!store.view(a).unwrap().expanded);
    }

    #[test]
    fn test_toggle_expand_unknown_collapses_all() {
        let mut store = ContactStore::new();
        let a = store.add_contact(valid("A", ""));
        store.toggle_expand(a);
        assert_eq!(store.toggle_expand(ContactId::new(77)), None);
    }

    #[test]
    fn test_add_group_rules() {
        let mut store = ContactStore::new();
        assert!(store.add_group("Family"));
        assert!(!store.add_group("Family"));
        assert!(!store.add_group("   "));
        assert!(store.add_group(" Gym "));
        assert_eq!(store.groups(), ["Family", "Gym"]);
    }

    #[test]
    fn test_visible_contacts_filter_then_search() {
        let mut store = ContactStore::new();
        let a = store.add_contact(valid("Alice", "Work"));
        store.add_contact(valid("Bob", "Friends"));
        store.add_contact(valid("Alina", "Friends"));
        store.toggle_favourite(a);

        let names = |views: Vec<ContactView>| -> Vec<String> {
            views.into_iter().map(|v| v.contact.name).collect()
        };

        assert_eq!(store.visible_contacts(&Filter::All, "").len(), 3);
        assert_eq!(names(store.visible_contacts(&Filter::Favourites, "")), ["Alice"]);
        assert_eq!(
            names(store.visible_contacts(&Filter::Group("Friends".to_string()), "ALI")),
            ["Alina"]
        );
        assert!(store
            .visible_contacts(&Filter::Group("Gym".to_string()), "")
            .is_empty());
        assert!(store
            .visible_contacts(&Filter::Group("Gym".to_string()), "a")
            .is_empty());
    }

    #[test]
    fn test_search_matches_phone() {
        let mut store = ContactStore::new();
        store.add_contact(valid("Alice", ""));
        assert_eq!(store.visible_contacts(&Filter::All, "+9198").len(), 1);
        assert!(store.visible_contacts(&Filter::All, "0000").is_empty());
    }
}
