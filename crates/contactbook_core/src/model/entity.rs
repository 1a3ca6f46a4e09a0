//! Generic entity contract shared by every stored record type.
//!
//! # Responsibility
//! - Describe the capability set a repository needs from a record:
//!   a stable identity and a self-contained validity check.
//! - Describe the optional search capability used by repository queries.
//!
//! # Invariants
//! - `id()` returns the same value for the whole lifetime of the record.
//! - `validate()` and `matches()` are pure: they never mutate the record.

use std::cmp::Ordering;
use std::error::Error;

/// Identity type used by every entity and repository lookup.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i32;

/// Capability contract for records that can be stored in a repository.
pub trait Entity {
    /// Describes which validity predicate failed.
    type ValidationError: Error + Send + Sync + 'static;

    /// Stable identity assigned at construction.
    fn id(&self) -> EntityId;

    /// Checks record-level invariants and reports the first violation.
    fn validate(&self) -> Result<(), Self::ValidationError>;

    /// Boolean form of [`Entity::validate`].
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Lifecycle hook called when the record leaves its owner.
    ///
    /// Records holding no external resources keep the default no-op.
    fn release(&mut self) {}
}

/// Query capability for entities exposed through repository search.
pub trait Searchable {
    /// Returns whether this record matches the free-text `query`.
    ///
    /// Absent optional fields never match.
    fn matches(&self, query: &str) -> bool;

    /// Ordering applied to search results.
    fn search_order(&self, other: &Self) -> Ordering;
}
