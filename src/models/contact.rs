//! Contact model.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A contact in the book.
///
/// Values held here have already been validated and normalized by the form that
/// produced them: `name` is trimmed and non-empty, `phone` is composed as
/// `+<country code><local number>`, and `email` is empty or contains '@'.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Composed phone number
    pub phone: String,

    /// Email address (may be empty)
    #[serde(default)]
    pub email: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// Group name, empty meaning no group
    #[serde(default)]
    pub group: String,

    /// Whether the contact is starred
    #[serde(default)]
    pub favourite: bool,
}

impl Contact {
    /// Whether the contact belongs to a group.
    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }

    /// Case-insensitive substring match against name, email and phone.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.phone.to_lowercase().contains(needle)
    }
}

/// A contact as presented to the surface, with its transient expansion flag.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactView {
    #[serde(flatten)]
    pub contact: Contact,

    /// Whether the detail panel is open for this contact
    pub expanded: bool,
}

/// The fields of a contact that passed form validation, ready to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact {
            id: ContactId::new(1),
            name: "Alice Johnson".to_string(),
            phone: "+919876543210".to_string(),
            email: "Alice@Example.com".to_string(),
            notes: String::new(),
            group: "Work".to_string(),
            favourite: false,
        }
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let contact = sample();
        assert!(contact.matches_search("alice"));
        assert!(contact.matches_search("example.com"));
        assert!(contact.matches_search("98765"));
        assert!(!contact.matches_search("bob"));
    }

    #[test]
    fn test_matches_search_ignores_notes_and_group() {
        let mut contact = sample();
        contact.notes = "robotics".to_string();
        assert!(!contact.matches_search("robotics"));
        assert!(!contact.matches_search("work"));
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = ContactView {
            contact: sample(),
            expanded: true,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice Johnson");
        assert_eq!(json["expanded"], true);
    }
}
