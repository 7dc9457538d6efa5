use chrono::{DateTime, Utc};
use crud_framework::EntityId;
use serde::{Deserialize, Serialize};

/// Status assigned to every new order.
pub const INITIAL_STATUS: &str = "pendiente";

/// One product/quantity/price tuple within an order. Replaced as a whole, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "producto_id")]
    pub product_id: EntityId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crud_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crud_framework::ResourceActor).
///
/// `total` is a derived field: it is recomputed from `items` by
/// [`order_total`](crate::order_actor::pricing::order_total) whenever the items are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(rename = "cliente_id")]
    pub customer_id: EntityId,
    #[serde(rename = "productos")]
    pub items: Vec<LineItem>,
    pub total: f64,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fecha_pedido")]
    pub ordered_at: DateTime<Utc>,
    #[serde(rename = "direccion_entrega")]
    pub delivery_address: String,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: EntityId,
    pub items: Vec<LineItem>,
    pub delivery_address: String,
}

/// Payload for updating an order. `items`, when present, replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub delivery_address: Option<String>,
    pub items: Option<Vec<LineItem>>,
}

#[derive(Debug, Clone)]
pub enum OrderFilter {
    Status(String),
    Customer(EntityId),
}
