//! # CRUD Framework
//!
//! This crate provides the building blocks for resource services: one generic engine that
//! owns a collection, assigns ids, filters, merges partial updates and persists after every
//! mutation. Each resource (users, orders, products, …) only describes *what* it is; the
//! framework handles *how* it is stored and served.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model, its payloads and its filter
//! 2. **Store Layer** ([`EntityStore`]) - The ordered collection and the id counter
//! 3. **Runtime Layer** ([`ResourceActor`]) - Sequential message processing + persistence
//! 4. **Interface Layer** ([`ResourceClient`]) - Type-safe, cloneable handle
//!
//! Persistence is pluggable through the [`Storage`] trait: [`MemoryStorage`] for
//! process-lifetime collections, [`JsonFileStorage`] for a JSON data file plus an id counter.
//!
//! ```rust
//! use crud_framework::{ActorEntity, EntityId, MemoryStorage, ResourceActor, Snapshot};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { id: EntityId, name: String }
//! #[derive(Debug)] struct TagCreate { name: String }
//! #[derive(Debug)] struct TagUpdate { name: Option<String> }
//! #[derive(Debug)] struct ByName(String);
//!
//! impl ActorEntity for Tag {
//!     const RESOURCE: &'static str = "tags";
//!     type Create = TagCreate;
//!     type Update = TagUpdate;
//!     type Filter = ByName;
//!
//!     fn id(&self) -> EntityId { self.id }
//!     fn from_create_params(id: EntityId, params: TagCreate) -> Self {
//!         Self { id, name: params.name }
//!     }
//!     fn on_update(&mut self, update: TagUpdate) {
//!         if let Some(name) = update.name { self.name = name; }
//!     }
//!     fn matches(&self, filter: &ByName) -> bool { self.name == filter.0 }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::open(10, Box::new(MemoryStorage), Snapshot::default)
//!         .await
//!         .unwrap();
//!     tokio::spawn(actor.run());
//!
//!     let tag = client.create(TagCreate { name: "rust".into() }).await.unwrap();
//!     assert_eq!(tag.id, 1);
//!     assert_eq!(client.filter(ByName("rust".into())).await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and owns its collection outright
//! - Messages are processed **sequentially** within an actor, so each request's
//!   read-modify-write is atomic for that resource
//! - Different resources run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, for
//! testing callers without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod store;

#[cfg(test)]
mod fixtures;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{ActorEntity, EntityId};
pub use error::{FrameworkError, StorageError};
pub use message::{ResourceRequest, Response};
pub use storage::{JsonFileStorage, MemoryStorage, Snapshot, Storage};
pub use store::EntityStore;
