//! Generic repository contract and error model.
//!
//! # Responsibility
//! - Define CRUD + search APIs over any [`Entity`] implementation.
//! - Provide semantic errors shared by every repository implementation.
//!
//! # Invariants
//! - `add` rejects duplicate ids before checking validity.
//! - `update` and `delete` locate records by id only.
//! - `find_by_id` reports absence as `None`, never as an error.

use crate::model::entity::{Entity, EntityId, Searchable};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity mutations.
#[derive(Debug)]
pub enum RepoError {
    /// Another stored entity already uses this id.
    DuplicateId(EntityId),
    /// The entity failed its own validity check on insert.
    InvalidEntity {
        id: EntityId,
        source: Box<dyn Error + Send + Sync>,
    },
    /// No stored entity has this id.
    NotFound(EntityId),
}

impl RepoError {
    /// Wraps an entity validation failure.
    pub fn invalid<E>(id: EntityId, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::InvalidEntity {
            id,
            source: Box::new(err),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate entity id {id}, try another"),
            Self::InvalidEntity { id, source } => write!(f, "entity {id} is invalid: {source}"),
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::InvalidEntity { source, .. } => Some(source.as_ref()),
            Self::NotFound(_) => None,
        }
    }
}

/// Repository interface for entity CRUD and search operations.
pub trait Repository<T: Entity> {
    /// Appends a new entity after uniqueness and validity checks.
    fn add(&mut self, entity: T) -> RepoResult<()>;
    /// Replaces the stored entity with the same id, keeping its position.
    fn update(&mut self, entity: T) -> RepoResult<()>;
    /// Removes the stored entity with the same id as `entity`.
    ///
    /// Returns `true` when a record was removed.
    fn delete(&mut self, entity: &T) -> bool;
    /// Gets one entity by id.
    fn find_by_id(&self, id: EntityId) -> Option<&T>;
    /// Returns all matching entities in search order.
    fn search(&self, query: &str) -> Vec<&T>
    where
        T: Searchable;
    /// Traverses stored entities in storage order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drops every stored entity; the repository stays usable.
    fn release(&mut self);
}
