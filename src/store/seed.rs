//! Sample data for a fresh session.

use super::ContactStore;
use crate::models::ValidatedContact;

/// Build a store holding the two sample contacts, with `groups` registered first.
///
/// Alice Johnson is starred and in Work; Bob Smith is in Friends. Their groups are
/// registered if `groups` does not already contain them.
pub fn sample_store<I, S>(groups: I) -> ContactStore
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut store = ContactStore::with_groups(groups);

    let alice = store.add_contact(ValidatedContact {
        name: "Alice Johnson".to_string(),
        phone: "+919876543210".to_string(),
        email: "alice@example.com".to_string(),
        notes: "Met at a robotics hackathon; ROS2 enthusiast.".to_string(),
        group: "Work".to_string(),
    });
    store.toggle_favourite(alice);

    store.add_contact(ValidatedContact {
        name: "Bob Smith".to_string(),
        phone: "+919123456780".to_string(),
        email: "bob@example.com".to_string(),
        notes: "Helps with PCB designs; CAN bus wizard.".to_string(),
        group: "Friends".to_string(),
    });

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;

    #[test]
    fn test_sample_store_contents() {
        let store = sample_store(["Friends", "Work"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.groups(), ["Friends", "Work"]);

        let alice = store.get(ContactId::new(1)).unwrap();
        assert_eq!(alice.name, "Alice Johnson");
        assert!(alice.favourite);

        let bob = store.get(ContactId::new(2)).unwrap();
        assert_eq!(bob.group, "Friends");
        assert!(!bob.favourite);
    }

    #[test]
    fn test_sample_store_registers_missing_groups() {
        let store = sample_store(["Family"]);
        assert_eq!(store.groups(), ["Family", "Work", "Friends"]);
    }
}
