//! # Storage Backends
//!
//! A [`Storage`] backend is where a [`ResourceActor`](crate::ResourceActor) puts its collection
//! after every mutation, and where it looks for one at startup. The store itself never
//! touches the backend, so swapping the in-memory backend for the JSON-file one (or an
//! embedded key-value store) does not change any CRUD semantics.
//!
//! | Backend | `load` | `save` |
//! |---------|--------|--------|
//! | [`MemoryStorage`] | always `None` (seed on every start) | no-op |
//! | [`JsonFileStorage`] | data file + counter file | rewrites both files in full |
//!
//! ## Known limitation
//! Each file is replaced atomically (write to a temp file, then rename), but the two files
//! are not replaced together. A crash between the two renames leaves a counter that lags
//! the data; [`EntityStore::from_snapshot`](crate::EntityStore::from_snapshot) repairs that
//! on the next start. A crash mid-write is otherwise not detected.

use crate::entity::{ActorEntity, EntityId};
use crate::error::StorageError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything needed to rebuild a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub entities: Vec<T>,
    pub next_id: EntityId,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }
}

/// Pluggable persistence for one collection.
#[async_trait]
pub trait Storage<T: ActorEntity>: Send + Sync {
    /// Short backend name for logs.
    fn kind(&self) -> &'static str;

    /// Returns the persisted collection, or `None` if nothing has been persisted yet.
    async fn load(&self) -> Result<Option<Snapshot<T>>, StorageError>;

    /// Persists the entire collection and the id counter.
    async fn save(&self, entities: &[T], next_id: EntityId) -> Result<(), StorageError>;
}

/// Keeps nothing. The collection lives only as long as the actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStorage;

#[async_trait]
impl<T: ActorEntity> Storage<T> for MemoryStorage {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Option<Snapshot<T>>, StorageError> {
        Ok(None)
    }

    async fn save(&self, _entities: &[T], _next_id: EntityId) -> Result<(), StorageError> {
        Ok(())
    }
}

/// A JSON array of entities plus a plain-text next-id counter.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_path: PathBuf,
    counter_path: PathBuf,
}

impl JsonFileStorage {
    /// Files are `<dir>/<resource>_data.json` and `<dir>/<resource>_next_id.txt`.
    pub fn new(dir: impl AsRef<Path>, resource: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            data_path: dir.join(format!("{resource}_data.json")),
            counter_path: dir.join(format!("{resource}_next_id.txt")),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn counter_path(&self) -> &Path {
        &self.counter_path
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn replace(path: &Path, contents: Vec<u8>) -> Result<(), StorageError> {
    let io_error = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, contents)
        .await
        .map_err(io_error)?;
    tokio::fs::rename(&temp_path, path).await.map_err(io_error)?;
    Ok(())
}

#[async_trait]
impl<T: ActorEntity> Storage<T> for JsonFileStorage {
    fn kind(&self) -> &'static str {
        "json-file"
    }

    async fn load(&self) -> Result<Option<Snapshot<T>>, StorageError> {
        let Some(raw) = read_optional(&self.data_path).await? else {
            return Ok(None);
        };
        let entities: Vec<T> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                path: self.data_path.clone(),
                source,
            })?;

        // A missing counter is rebuilt from the data by `EntityStore::from_snapshot`.
        let next_id = match read_optional(&self.counter_path).await? {
            Some(raw) => {
                let value = raw.trim();
                value.parse().map_err(|_| StorageError::InvalidCounter {
                    path: self.counter_path.clone(),
                    value: value.to_string(),
                })?
            }
            None => 0,
        };

        debug!(path = %self.data_path.display(), count = entities.len(), next_id, "Loaded snapshot");
        Ok(Some(Snapshot { entities, next_id }))
    }

    async fn save(&self, entities: &[T], next_id: EntityId) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(entities)?;
        replace(&self.data_path, payload).await?;
        replace(&self.counter_path, next_id.to_string().into_bytes()).await?;
        debug!(path = %self.data_path.display(), count = entities.len(), next_id, "Saved snapshot");
        Ok(())
    }
}
