//! Entity trait implementation for the Product domain type.
//!
//! Products filter by `categoria`, compared the same way as user roles.

use crate::model::{same_category, Product, ProductCreate, ProductFilter, ProductUpdate};
use chrono::Utc;
use crud_framework::{ActorEntity, EntityId};

impl ActorEntity for Product {
    const RESOURCE: &'static str = "productos";
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            stock: params.stock,
            created_at: Utc::now(),
        }
    }

    fn on_update(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::Category(category) => same_category(&self.category, category),
        }
    }
}
