//! Behavioural tests for the contact book session.
//!
//! These exercise the public API end to end: adding and editing through drafts,
//! the per-contact actions, groups, and the derived visible list.

mod fixtures;

use contact_book::{
    ContactId, Dialog, Field, Filter, SaveOutcome, StoreError, ValidationError,
};
use fixtures::*;

#[test]
fn test_add_valid_contact() {
    let mut session = empty_session();
    let id = session
        .add_contact(&draft("Zara", "91", "9876543210", ""))
        .unwrap();

    assert_eq!(id, ContactId::new(1));
    let contact = &session.store().contacts()[0];
    assert_eq!(contact.phone, "+919876543210");
    assert_eq!(contact.email, "");
    assert!(!contact.favourite);
    assert_eq!(session.store().expanded_id(), None);
}

#[test]
fn test_add_short_local_number_fails() {
    let mut session = seeded_session();
    let err = session
        .add_contact(&draft("Zara", "91", "12345", ""))
        .unwrap_err();

    match err {
        StoreError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(Field::PhoneLocal),
                Some(ValidationError::EnterTenDigits)
            );
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert_eq!(session.store().len(), 2);
}

#[test]
fn test_email_rules_on_add() {
    let mut session = empty_session();

    let err = session
        .add_contact(&draft("Zara", "91", "9876543210", "nope"))
        .unwrap_err();
    match err {
        StoreError::Validation(errors) => {
            assert_eq!(errors.get(Field::Email), Some(ValidationError::MustContainAt));
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert!(session.store().is_empty());

    assert!(session
        .add_contact(&draft("Zara", "91", "9876543210", ""))
        .is_ok());
    assert!(session
        .add_contact(&draft("Yusuf", "91", "9876543211", " yusuf@example.com "))
        .is_ok());
    assert_eq!(session.store().contacts()[1].email, "yusuf@example.com");
}

#[test]
fn test_blank_name_blocks_save() {
    let mut session = empty_session();
    let err = session
        .add_contact(&draft("   ", "91", "9876543210", ""))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref e) if e.get(Field::Name).is_some()));
    assert!(session.store().is_empty());
}

#[test]
fn test_ids_follow_max_existing() {
    let mut session = seeded_session();
    session.delete_contact(ContactId::new(1));
    let id = session
        .add_contact(&draft("Zara", "91", "9876543210", ""))
        .unwrap();
    assert_eq!(id, ContactId::new(3));
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut session = seeded_session();
    let before = session.store().contacts().to_vec();
    assert!(!session.delete_contact(ContactId::new(404)));
    assert_eq!(session.store().contacts(), before.as_slice());
}

#[test]
fn test_expand_is_single_selection() {
    let mut session = seeded_session();
    let a = ContactId::new(1);
    let b = ContactId::new(2);

    session.toggle_expand(b);
    session.toggle_expand(a);
    let expanded: Vec<ContactId> = session
        .visible_contacts()
        .into_iter()
        .filter(|v| v.expanded)
        .map(|v| v.contact.id)
        .collect();
    assert_eq!(expanded, [a]);

    session.toggle_expand(a);
    assert!(session.visible_contacts().iter().all(|v| !v.expanded));
}

#[test]
fn test_favourites_filter() {
    let mut session = seeded_session();
    session.set_filter(Filter::Favourites);
    assert_eq!(visible_names(&session), ["Alice Johnson"]);

    session.toggle_favourite(ContactId::new(2));
    assert_eq!(visible_names(&session), ["Alice Johnson", "Bob Smith"]);
}

#[test]
fn test_empty_group_filter_and_search_compose() {
    let mut session = seeded_session();
    session.add_group("Family");
    session.set_filter(Filter::Group("Family".to_string()));
    assert!(session.visible_contacts().is_empty());

    session.set_search("alice");
    assert!(session.visible_contacts().is_empty());

    session.set_filter(Filter::Group("Friends".to_string()));
    assert!(session.visible_contacts().is_empty());

    session.set_search("");
    assert_eq!(visible_names(&session), ["Bob Smith"]);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let mut session = seeded_session();

    session.set_search("BOB@EXAMPLE");
    assert_eq!(visible_names(&session), ["Bob Smith"]);

    session.set_search("+91987");
    assert_eq!(visible_names(&session), ["Alice Johnson"]);

    session.set_search("example.com");
    assert_eq!(visible_names(&session).len(), 2);

    // Notes are not searched
    session.set_search("hackathon");
    assert!(session.visible_contacts().is_empty());
}

#[test]
fn test_new_group_appended_once() {
    let mut session = seeded_session();
    let mut climbing = draft("Zara", "91", "9876543210", "");
    climbing.set_field(Field::Group, "Climbing");

    session.add_contact(&climbing).unwrap();
    session.add_contact(&climbing).unwrap();

    assert_eq!(session.store().groups(), ["Friends", "Work", "Climbing"]);
}

#[test]
fn test_edit_round_trips_phone_and_keeps_flags() {
    let mut session = seeded_session();
    let alice = ContactId::new(1);
    session.toggle_expand(alice);

    session.open_edit_dialog(alice).unwrap();
    session.set_draft_field(Field::Notes, "  Moved to Berlin  ").unwrap();
    assert_eq!(
        session.save_dialog().unwrap(),
        SaveOutcome::Updated { id: alice }
    );

    let view = session.contact(alice).unwrap();
    assert_eq!(view.contact.phone, "+919876543210");
    assert_eq!(view.contact.notes, "Moved to Berlin");
    assert!(view.contact.favourite);
    assert!(view.expanded);
}

#[test]
fn test_dialog_errors_shown_until_fixed() {
    let mut session = empty_session();
    session.open_add_dialog();
    session.set_draft_field(Field::Name, "Zara").unwrap();

    assert_eq!(
        session.set_draft_field(Field::PhoneLocal, "98765").unwrap(),
        Some(ValidationError::EnterTenDigits)
    );
    assert!(session.save_dialog().is_err());

    assert_eq!(
        session.set_draft_field(Field::PhoneLocal, "9876543210").unwrap(),
        None
    );
    assert_eq!(
        session.save_dialog().unwrap(),
        SaveOutcome::Added { id: ContactId::new(1) }
    );
    assert_eq!(session.dialog(), &Dialog::Closed);
}
