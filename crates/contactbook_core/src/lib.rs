//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::contact::{Contact, ContactGroup, ContactValidationError};
pub use model::entity::{Entity, EntityId, Searchable};
pub use repo::contact_repo::{seed_contacts, shared_contacts, ContactRepository};
pub use repo::memory_repo::InMemoryRepository;
pub use repo::repository::{RepoError, RepoResult, Repository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
