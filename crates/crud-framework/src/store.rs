//! # Entity Store
//!
//! The in-memory collection for one resource type. It assigns identifiers, keeps entities in
//! insertion order and implements the CRUD + filter operations. It knows nothing about
//! channels or files: the [`ResourceActor`](crate::ResourceActor) owns one store and decides
//! when to persist it.

use crate::entity::{ActorEntity, EntityId};
use crate::storage::Snapshot;

/// Ordered collection of entities plus the id counter.
#[derive(Debug, Clone)]
pub struct EntityStore<T: ActorEntity> {
    entities: Vec<T>,
    next_id: EntityId,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: ActorEntity> EntityStore<T> {
    /// Restores a store from a persisted snapshot.
    ///
    /// The counter is never allowed to fall at or below an id already in use, even if the
    /// persisted counter lags behind the data file.
    pub fn from_snapshot(snapshot: Snapshot<T>) -> Self {
        let max_id = snapshot.entities.iter().map(T::id).max().unwrap_or(0);
        Self {
            next_id: snapshot.next_id.max(max_id + 1),
            entities: snapshot.entities,
        }
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All current entities, insertion order.
    pub fn list(&self) -> Vec<T> {
        self.entities.clone()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Assigns the next id, builds the entity and appends it.
    pub fn create(&mut self, params: T::Create) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        let index = self.entities.len();
        self.entities.push(T::from_create_params(id, params));
        &self.entities[index]
    }

    /// Merges `update` into the entity with `id`. Returns `None` if no such entity exists.
    pub fn update(&mut self, id: EntityId, update: T::Update) -> Option<&T> {
        let entity = self.entities.iter_mut().find(|entity| entity.id() == id)?;
        entity.on_update(update);
        Some(&*entity)
    }

    /// Removes the entity with `id`. The id is never handed out again.
    pub fn delete(&mut self, id: EntityId) -> bool {
        self.remove(id).is_some()
    }

    /// Removes the entity with `id` and returns it with the position it held, so that
    /// [`restore`](Self::restore) can put it back.
    pub fn remove(&mut self, id: EntityId) -> Option<(usize, T)> {
        let index = self.entities.iter().position(|entity| entity.id() == id)?;
        Some((index, self.entities.remove(index)))
    }

    /// Re-inserts an entity at `index`, clamped to the current length.
    pub fn restore(&mut self, index: usize, entity: T) {
        let index = index.min(self.entities.len());
        self.entities.insert(index, entity);
    }

    /// Overwrites the stored entity that has the same id. Returns `false` if there is none.
    pub fn replace(&mut self, entity: T) -> bool {
        let id = entity.id();
        match self.entities.iter_mut().find(|current| current.id() == id) {
            Some(current) => {
                *current = entity;
                true
            }
            None => false,
        }
    }

    pub fn filter(&self, filter: &T::Filter) -> Vec<T> {
        self.entities
            .iter()
            .filter(|entity| entity.matches(filter))
            .cloned()
            .collect()
    }
}
