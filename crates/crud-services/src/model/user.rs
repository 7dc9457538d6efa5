use chrono::{DateTime, Utc};
use crud_framework::EntityId;
use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crud_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crud_framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - Filters ([`UserFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "fecha_registro")]
    pub registered_at: DateTime<Utc>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

/// Payload for updating an existing user. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum UserFilter {
    Role(String),
}
