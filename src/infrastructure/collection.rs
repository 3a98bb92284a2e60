use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};

/// Implemented by every stored entity kind.
pub trait Record: Clone {
    fn id(&self) -> Uuid;

    /// Refresh the modification timestamp. Called by [`Collection::update`]
    /// after every successful mutation, whether or not a field changed.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// Ordered collection of one entity kind. Backed by a `Vec` so listing
/// returns entities in insertion order, exactly as they were created.
///
/// Absence is represented (`Option` / `bool`), never signalled by panicking:
/// the caller decides what a miss means.
#[derive(Debug)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an entity whose id is already assigned. The store is the only
    /// id issuer, so a collision here means a broken invariant, not a caller
    /// mistake.
    pub fn insert(&mut self, entity: T) -> Result<T> {
        if self.contains(entity.id()) {
            return Err(DomainError::internal(format!(
                "id {} already present in collection",
                entity.id()
            )));
        }
        self.items.push(entity.clone());
        Ok(entity)
    }

    pub fn all(&self) -> Vec<T> {
        self.items.to_vec()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|entity| entity.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.find_by_id(id).is_some()
    }

    /// First entity matching the predicate; used for natural-key lookups.
    pub fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|entity| predicate(entity))
    }

    /// Every entity matching the predicate, in insertion order.
    pub fn select_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items
            .iter()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    /// Mutate the entity in place and refresh its `updated_at`. Returns the
    /// updated clone, or `None` if the id is absent.
    pub fn update(&mut self, id: Uuid, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let entity = self.items.iter_mut().find(|entity| entity.id() == id)?;
        mutate(entity);
        entity.touch(Utc::now());
        Some(entity.clone())
    }

    /// Remove by id; reports whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|entity| entity.id() != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
