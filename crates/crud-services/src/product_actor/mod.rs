//! Product-specific resource logic and entity implementation.

pub mod entity;
pub mod rest;

use crate::model::Product;
use chrono::Utc;
use crud_framework::{FrameworkError, ResourceActor, ResourceClient, Snapshot, Storage};

/// Opens the Product actor on `storage` and returns it with its client.
pub async fn new(
    storage: Box<dyn Storage<Product>>,
) -> Result<(ResourceActor<Product>, ResourceClient<Product>), FrameworkError> {
    ResourceActor::open(32, storage, seed).await
}

/// The two catalogue entries every fresh product collection starts with, both in
/// `tecnologia`.
pub fn seed() -> Snapshot<Product> {
    let now = Utc::now();
    let product = |id, name: &str, description: &str, price, stock| Product {
        id,
        name: name.into(),
        description: description.into(),
        price,
        category: "tecnologia".into(),
        stock,
        created_at: now,
    };

    Snapshot {
        entities: vec![
            product(1, "Laptop Gamer", "Laptop para gaming de alta gama", 1500.99, 10),
            product(2, "Mouse Inalámbrico", "Mouse ergonómico inalámbrico", 45.50, 25),
        ],
        next_id: 3,
    }
}
