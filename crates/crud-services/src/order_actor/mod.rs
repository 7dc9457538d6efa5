//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod pricing;
pub mod rest;

use crate::model::{LineItem, Order, INITIAL_STATUS};
use chrono::{Duration, Utc};
use crud_framework::{FrameworkError, ResourceActor, ResourceClient, Snapshot, Storage};
use pricing::order_total;

/// Opens the Order actor on `storage` and returns it with its client.
pub async fn new(
    storage: Box<dyn Storage<Order>>,
) -> Result<(ResourceActor<Order>, ResourceClient<Order>), FrameworkError> {
    ResourceActor::open(32, storage, seed).await
}

/// One open order and one delivered the day before.
pub fn seed() -> Snapshot<Order> {
    let now = Utc::now();
    let item = |product_id, quantity, unit_price| LineItem {
        product_id,
        quantity,
        unit_price,
    };
    let order = |id, customer_id, items: Vec<LineItem>, status: &str, ordered_at, address: &str| {
        Order {
            id,
            customer_id,
            total: order_total(&items),
            items,
            status: status.into(),
            ordered_at,
            delivery_address: address.into(),
        }
    };

    Snapshot {
        entities: vec![
            order(
                1,
                1,
                vec![item(1, 2, 1500.99), item(2, 1, 45.50)],
                INITIAL_STATUS,
                now,
                "Calle 123 #45-67, Bogotá",
            ),
            order(
                2,
                2,
                vec![item(2, 3, 45.50)],
                "entregado",
                now - Duration::days(1),
                "Carrera 456 #78-90, Medellín",
            ),
        ],
        next_id: 3,
    }
}
