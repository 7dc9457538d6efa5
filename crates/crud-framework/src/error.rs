//! # Framework Errors
//!
//! This module defines the common error types used throughout the framework.
//! By centralizing error definitions, every resource reports the same failure kinds and the
//! HTTP layer can map them to status codes in one place.

use crate::entity::EntityId;
use std::path::PathBuf;

/// Errors that can occur within the framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(EntityId),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised by a [`Storage`](crate::storage::Storage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed data file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Malformed id counter in {}: {value:?}", .path.display())]
    InvalidCounter { path: PathBuf, value: String },
}
