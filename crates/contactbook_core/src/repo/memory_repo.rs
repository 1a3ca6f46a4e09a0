//! In-memory repository implementation.
//!
//! # Responsibility
//! - Keep entities in insertion order inside one owned `Vec`.
//! - Enforce id uniqueness and validity at the `add` boundary.
//!
//! # Invariants
//! - No two entities added through `add` share an id.
//! - `update` never changes position or count.
//! - Seeded entities bypass validation.
//! - Positional access (`get`, `[index]`) follows current storage order.

use crate::model::entity::{Entity, EntityId, Searchable};
use crate::repo::repository::{RepoError, RepoResult, Repository};
use log::{debug, info, warn};
use std::ops::Index;

/// Vec-backed repository for any [`Entity`].
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: Vec<T>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Creates a repository holding `entities` as-is.
    ///
    /// # Invariants
    /// - No validity or uniqueness checks run on this path.
    pub fn from_entities(entities: Vec<T>) -> Self {
        Self { entities }
    }

    /// Gets the entity at `index` in storage order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entities.get(index)
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id() == id)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) -> RepoResult<()> {
        let id = entity.id();
        if self.position(id).is_some() {
            warn!("event=entity_add module=repo status=rejected reason=duplicate_id id={id}");
            return Err(RepoError::DuplicateId(id));
        }
        if let Err(err) = entity.validate() {
            warn!("event=entity_add module=repo status=rejected reason=invalid id={id}");
            return Err(RepoError::invalid(id, err));
        }

        self.entities.push(entity);
        debug!(
            "event=entity_add module=repo status=ok id={id} count={}",
            self.entities.len()
        );
        Ok(())
    }

    fn update(&mut self, entity: T) -> RepoResult<()> {
        let id = entity.id();
        let Some(index) = self.position(id) else {
            warn!("event=entity_update module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        self.entities[index] = entity;
        debug!("event=entity_update module=repo status=ok id={id} index={index}");
        Ok(())
    }

    fn delete(&mut self, entity: &T) -> bool {
        let id = entity.id();
        match self.position(id) {
            Some(index) => {
                self.entities.remove(index).release();
                debug!("event=entity_delete module=repo status=ok id={id}");
                true
            }
            None => {
                debug!("event=entity_delete module=repo status=not_found id={id}");
                false
            }
        }
    }

    fn find_by_id(&self, id: EntityId) -> Option<&T> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    fn search(&self, query: &str) -> Vec<&T>
    where
        T: Searchable,
    {
        let mut hits: Vec<&T> = self
            .entities
            .iter()
            .filter(|entity| entity.matches(query))
            .collect();
        hits.sort_by(|a, b| a.search_order(b));
        debug!(
            "event=entity_search module=repo status=ok hits={}",
            hits.len()
        );
        hits
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.entities.iter())
    }

    fn len(&self) -> usize {
        self.entities.len()
    }

    fn release(&mut self) {
        let released = self.entities.len();
        for mut entity in self.entities.drain(..) {
            entity.release();
        }
        info!("event=repo_release module=repo status=ok released={released}");
    }
}

/// Positional access; panics when `index` is out of range, like slice indexing.
impl<T> Index<usize> for InMemoryRepository<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.entities[index]
    }
}

impl<'a, T> IntoIterator for &'a InMemoryRepository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepository;
    use crate::model::entity::{Entity, EntityId, Searchable};
    use crate::repo::repository::{RepoError, Repository};
    use std::cmp::Ordering;
    use std::error::Error;
    use std::fmt::{Display, Formatter};

    #[derive(Debug)]
    struct EmptyLabel;

    impl Display for EmptyLabel {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "label must not be empty")
        }
    }

    impl Error for EmptyLabel {}

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: EntityId,
        label: String,
    }

    fn tag(id: EntityId, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    impl Entity for Tag {
        type ValidationError = EmptyLabel;

        fn id(&self) -> EntityId {
            self.id
        }

        fn validate(&self) -> Result<(), EmptyLabel> {
            if self.label.is_empty() {
                return Err(EmptyLabel);
            }
            Ok(())
        }
    }

    impl Searchable for Tag {
        fn matches(&self, query: &str) -> bool {
            self.label.contains(query)
        }

        fn search_order(&self, other: &Self) -> Ordering {
            self.label.cmp(&other.label)
        }
    }

    #[test]
    fn add_then_find_roundtrip() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(1, "alpha")).expect("unique valid tag should be added");

        assert_eq!(repo.find_by_id(1), Some(&tag(1, "alpha")));
        assert_eq!(repo.find_by_id(2), None);
    }

    #[test]
    fn duplicate_check_runs_before_validation() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(1, "alpha")).expect("unique valid tag should be added");

        let err = repo.add(tag(1, "")).expect_err("duplicate id should be rejected");
        assert!(matches!(err, RepoError::DuplicateId(1)));
    }

    #[test]
    fn invalid_entity_keeps_validation_source() {
        let mut repo = InMemoryRepository::<Tag>::new();
        let err = repo.add(tag(5, "")).expect_err("empty label should be rejected");

        assert!(matches!(err, RepoError::InvalidEntity { id: 5, .. }));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("label must not be empty")
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn seeded_entities_bypass_validation() {
        let repo = InMemoryRepository::from_entities(vec![tag(1, ""), tag(1, "")]);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn search_sorts_stably_by_search_order() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(1, "beta")).expect("valid tag should be added");
        repo.add(tag(2, "alpha")).expect("valid tag should be added");
        repo.add(tag(3, "beta")).expect("valid tag should be added");
        repo.add(tag(4, "gamma")).expect("valid tag should be added");

        let ids: Vec<EntityId> = repo.search("a").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);

        let ids: Vec<EntityId> = repo.search("et").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn iter_is_restartable_and_follows_storage_order() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(3, "c")).expect("valid tag should be added");
        repo.add(tag(1, "a")).expect("valid tag should be added");

        let first: Vec<EntityId> = repo.iter().map(|t| t.id).collect();
        let second: Vec<EntityId> = (&repo).into_iter().map(|t| t.id).collect();
        assert_eq!(first, vec![3, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn positional_access_follows_storage_order() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(7, "a")).expect("valid tag should be added");
        repo.add(tag(3, "b")).expect("valid tag should be added");
        repo.add(tag(5, "c")).expect("valid tag should be added");

        assert_eq!(repo.get(0).map(|t| t.id), Some(7));
        assert_eq!(repo[2].id, 5);
        assert_eq!(repo.get(3), None);

        assert!(repo.delete(&tag(7, "a")));
        assert_eq!(repo.get(0).map(|t| t.id), Some(3));
        assert_eq!(repo[1].id, 5);
        assert_eq!(repo.get(2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let repo = InMemoryRepository::from_entities(vec![tag(1, "a")]);
        let _ = &repo[1];
    }

    #[test]
    fn release_empties_but_keeps_repository_usable() {
        let mut repo = InMemoryRepository::<Tag>::new();
        repo.add(tag(1, "a")).expect("valid tag should be added");
        repo.release();
        assert!(repo.is_empty());

        repo.add(tag(1, "a")).expect("valid tag should be added");
        assert_eq!(repo.len(), 1);
    }
}
