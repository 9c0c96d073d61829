//! Shared fixtures for integration tests.

#![allow(dead_code)]

use contact_book::{Config, ContactDraft, Field, Session};

/// A session seeded with the two sample contacts and groups Friends, Work.
pub fn seeded_session() -> Session {
    Session::from_config(&Config::default())
}

/// A session with no contacts and groups Friends, Work.
pub fn empty_session() -> Session {
    Session::from_config(&Config {
        seed_samples: false,
        ..Config::default()
    })
}

/// A draft filled the way a user would type it.
pub fn draft(name: &str, cc: &str, local: &str, email: &str) -> ContactDraft {
    let mut draft = ContactDraft::default();
    draft.set_field(Field::Name, name);
    draft.set_field(Field::PhoneCc, cc);
    draft.set_field(Field::PhoneLocal, local);
    draft.set_field(Field::Email, email);
    draft
}

/// Names of the visible contacts, in order.
pub fn visible_names(session: &Session) -> Vec<String> {
    session
        .visible_contacts()
        .into_iter()
        .map(|v| v.contact.name)
        .collect()
}
