//! Entity trait implementation for the Order domain type.
//!
//! The order total is never taken from the caller: it is computed from the line items on
//! create and recomputed whenever an update replaces them.

use super::pricing::order_total;
use crate::model::{same_category, Order, OrderCreate, OrderFilter, OrderUpdate, INITIAL_STATUS};
use chrono::Utc;
use crud_framework::{ActorEntity, EntityId};

impl ActorEntity for Order {
    const RESOURCE: &'static str = "pedidos";
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: OrderCreate) -> Self {
        Self {
            id,
            customer_id: params.customer_id,
            total: order_total(&params.items),
            items: params.items,
            status: INITIAL_STATUS.to_string(),
            ordered_at: Utc::now(),
            delivery_address: params.delivery_address,
        }
    }

    fn on_update(&mut self, update: OrderUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(address) = update.delivery_address {
            self.delivery_address = address;
        }
        if let Some(items) = update.items {
            self.total = order_total(&items);
            self.items = items;
        }
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::Status(status) => same_category(&self.status, status),
            OrderFilter::Customer(customer_id) => self.customer_id == *customer_id,
        }
    }
}
