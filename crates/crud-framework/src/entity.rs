//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (User, Order, Product, …)
//! must implement to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! # Architecture Note
//! By defining a contract that all resource types must satisfy, the store, the actor loop
//! and the persistence backends are written *once* and reused for every collection.
//!
//! Associated types keep the operations type-safe: a `User` store only accepts a `UserCreate`
//! payload, and an `Order` store can only be filtered with an `OrderFilter`.
//!
//! Hooks are plain synchronous methods. Validation happens before a payload reaches the
//! store, so creation and merging cannot fail once they get here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Identifier assigned by the store. Monotonically increasing, never reused.
pub type EntityId = u64;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, used in logs and as the persisted file stem (e.g. `usuarios`).
    const RESOURCE: &'static str;

    /// The data required to create a new instance (already validated).
    type Create: Send + Sync + Debug;

    /// Merge-patch payload: `None` fields leave the current value untouched.
    type Update: Send + Sync + Debug;

    /// Predicate over a single field (role, status, customer, …).
    type Filter: Send + Sync + Debug;

    /// The identifier assigned at creation.
    fn id(&self) -> EntityId;

    /// Construct the full entity from the assigned id and the creation payload.
    ///
    /// Implementations stamp the creation time and set default flags/status here.
    fn from_create_params(id: EntityId, params: Self::Create) -> Self;

    /// Apply a merge-patch update in place.
    fn on_update(&mut self, update: Self::Update);

    /// Whether this entity satisfies the filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
