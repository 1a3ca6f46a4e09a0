//! Contact repository: seed dataset and shared process-wide instance.
//!
//! # Responsibility
//! - Bind the in-memory repository to the `Contact` entity.
//! - Provide the fixed seed dataset and the lazily created shared store.
//!
//! # Invariants
//! - The shared store is created once, on first access, and then cached.
//! - Releasing the shared store empties it without tearing down the handle.

use crate::model::contact::Contact;
use crate::repo::memory_repo::InMemoryRepository;
use log::info;
use once_cell::sync::Lazy;
use std::sync::Mutex;

const SEED_FIRST_NAME: &str = "Abdur";
const SEED_LAST_NAME: &str = "Rahman";
const SEED_EMAIL: &str = "abdur@gmail.com";

/// In-memory repository of contacts.
pub type ContactRepository = InMemoryRepository<Contact>;

static SHARED_CONTACTS: Lazy<Mutex<ContactRepository>> = Lazy::new(|| {
    info!("event=repo_init module=repo status=ok store=shared_contacts");
    Mutex::new(ContactRepository::seeded())
});

impl InMemoryRepository<Contact> {
    /// Creates a contact repository holding the fixed seed dataset.
    ///
    /// # Invariants
    /// - Ids 1 through 7, in order.
    /// - Only id 1 has a mobile number; ids 2..=7 are stored although they
    ///   would fail validation on `add`.
    pub fn seeded() -> Self {
        Self::from_entities(seed_contacts())
    }
}

/// Returns the shared contact store, creating it on first access.
///
/// Prefer constructing a [`ContactRepository`] explicitly and passing it to
/// consumers; this accessor exists for callers that need one process-wide
/// store.
pub fn shared_contacts() -> &'static Mutex<ContactRepository> {
    &SHARED_CONTACTS
}

/// Fixed seed records used by [`ContactRepository::seeded`].
pub fn seed_contacts() -> Vec<Contact> {
    (1..=7)
        .map(|id| {
            let mobile_number = if id == 1 { "1234" } else { "" };
            Contact::with_details(id, mobile_number, SEED_FIRST_NAME)
                .with_last_name(SEED_LAST_NAME)
                .with_email(SEED_EMAIL)
        })
        .collect()
}
