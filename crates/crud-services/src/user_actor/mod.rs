//! User-specific resource logic and entity implementation.

pub mod entity;
pub mod rest;

use crate::model::User;
use chrono::Utc;
use crud_framework::{FrameworkError, ResourceActor, ResourceClient, Snapshot, Storage};

/// Opens the User actor on `storage` and returns it with its client.
pub async fn new(
    storage: Box<dyn Storage<User>>,
) -> Result<(ResourceActor<User>, ResourceClient<User>), FrameworkError> {
    ResourceActor::open(32, storage, seed).await
}

/// The two accounts every fresh user collection starts with.
pub fn seed() -> Snapshot<User> {
    let now = Utc::now();
    let user = |id, name: &str, email: &str, phone: &str, role: &str| User {
        id,
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        role: role.into(),
        registered_at: now,
        active: true,
    };

    Snapshot {
        entities: vec![
            user(1, "Juan Pérez", "juan@example.com", "+57 300 123 4567", "admin"),
            user(2, "María García", "maria@example.com", "+57 301 234 5678", "usuario"),
        ],
        next_id: 3,
    }
}
