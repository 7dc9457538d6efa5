//! Pure data structures implementing the [`ActorEntity`](crud_framework::ActorEntity) trait.
//!
//! Rust field names are English; the wire names (`nombre`, `cliente_id`, …) are the ones the
//! browser front end already speaks, set with `#[serde(rename)]`.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

/// Case-insensitive comparison used by every categorical filter (role, status, category).
pub fn same_category(value: &str, wanted: &str) -> bool {
    value.to_lowercase() == wanted.to_lowercase()
}
