//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::{ActorEntity, EntityId};
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the store's operations:
///
/// - **List** / **Get** / **Filter**: reads, never persisted.
/// - **Create**: uses [`ActorEntity::Create`]; responds with the stored entity.
/// - **Update**: merge-patch with [`ActorEntity::Update`]; `NotFound` if the id is unknown.
/// - **Delete**: responds `true` if something was removed.
///
/// The enum is generic over `T: ActorEntity`, so a `User` payload can never reach an
/// `Order` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    Filter {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: EntityId,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: EntityId,
        respond_to: Response<bool>,
    },
}
