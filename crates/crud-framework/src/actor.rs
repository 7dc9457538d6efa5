//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one [`EntityStore`] and
//! its [`Storage`] backend. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the collection.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::storage::{Snapshot, Storage};
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), the
/// persistence backend and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially*, so every request's read-modify-write
/// (including the write to disk) completes before the next request for the same resource is
/// looked at. No `Mutex` is needed around the store, and no static holds it: the only way in
/// is the [`ResourceClient`] handed out by [`ResourceActor::open`].
///
/// # Usage Pattern
///
/// 1.  **Open**: Call `ResourceActor::open()` to load (or seed) the collection and get the
///     `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client into whatever needs it.
///
/// # Persistence
///
/// After every successful Create, Update or Delete the whole collection and the id counter
/// are handed to the storage backend. If that write fails the caller gets
/// [`FrameworkError::Storage`] and the change is undone in memory, so the collection always
/// matches what was last written. The id counter is not rewound.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
    storage: Box<dyn Storage<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Opens the collection and creates the actor with its associated `ResourceClient`.
    ///
    /// If the backend has nothing persisted yet, `seed` provides the initial collection,
    /// which is written back immediately.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - Where the collection is loaded from and saved to.
    /// * `seed` - Initial collection for a backend with no data.
    pub async fn open(
        buffer_size: usize,
        storage: Box<dyn Storage<T>>,
        seed: impl FnOnce() -> Snapshot<T>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let store = match storage.load().await? {
            Some(snapshot) => {
                let store = EntityStore::from_snapshot(snapshot);
                info!(resource = T::RESOURCE, backend = storage.kind(), size = store.len(), "Loaded");
                store
            }
            None => {
                let store = EntityStore::from_snapshot(seed());
                storage.save(store.entities(), store.next_id()).await?;
                info!(resource = T::RESOURCE, backend = storage.kind(), size = store.len(), "Seeded");
                store
            }
        };

        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            storage,
        };
        Ok((actor, ResourceClient::new(sender)))
    }

    async fn persist(&self) -> Result<(), FrameworkError> {
        self.storage
            .save(self.store.entities(), self.store.next_id())
            .await
            .map_err(|e| {
                error!(resource = T::RESOURCE, error = %e, "Persist failed");
                FrameworkError::from(e)
            })
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let resource = T::RESOURCE;
        info!(resource, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(resource, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.list()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(id).cloned();
                    debug!(resource, id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Filter { filter, respond_to } => {
                    let items = self.store.filter(&filter);
                    debug!(resource, ?filter, matched = items.len(), "Filter");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(resource, ?params, "Create");
                    let item = self.store.create(params).clone();
                    let result = match self.persist().await {
                        Ok(()) => {
                            info!(resource, id = item.id(), size = self.store.len(), "Created");
                            Ok(item)
                        }
                        Err(e) => {
                            self.store.remove(item.id());
                            warn!(resource, id = item.id(), "Create rolled back");
                            Err(e)
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(resource, id, ?update, "Update");
                    let previous = self.store.get(id).cloned();
                    let Some(item) = self.store.update(id, update).cloned() else {
                        warn!(resource, id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                        continue;
                    };
                    let result = match self.persist().await {
                        Ok(()) => {
                            info!(resource, id, "Updated");
                            Ok(item)
                        }
                        Err(e) => {
                            if let Some(previous) = previous {
                                self.store.replace(previous);
                            }
                            warn!(resource, id, "Update rolled back");
                            Err(e)
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(resource, id, "Delete");
                    let Some((index, removed)) = self.store.remove(id) else {
                        warn!(resource, id, "Not found");
                        let _ = respond_to.send(Ok(false));
                        continue;
                    };
                    let result = match self.persist().await {
                        Ok(()) => {
                            info!(resource, id, size = self.store.len(), "Deleted");
                            Ok(true)
                        }
                        Err(e) => {
                            self.store.restore(index, removed);
                            warn!(resource, id, "Delete rolled back");
                            Err(e)
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(resource, size = self.store.len(), "Shutdown");
    }
}
