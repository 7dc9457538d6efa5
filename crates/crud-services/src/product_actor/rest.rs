//! JSON binding for products. Every field is required on create; `precio` and `stock` may
//! be zero but never negative.

use crate::http::RestResource;
use crate::model::{Product, ProductCreate, ProductFilter, ProductUpdate};
use crate::validation::{FieldReader, JsonObject, ValidationError};
use serde_json::{json, Value};

impl RestResource for Product {
    const LABEL: &'static str = "Producto";
    const FILTERS: &'static [&'static str] = &["categoria"];

    fn create_from_json(body: &JsonObject) -> Result<ProductCreate, ValidationError> {
        let mut reader = FieldReader::create(body);
        let name = reader.required_text("nombre");
        let description = reader.required_text("descripcion");
        let price = reader.required_amount("precio");
        let category = reader.required_text("categoria");
        let stock = reader.required_count("stock");
        reader.finish(|| {
            Some(ProductCreate {
                name: name?,
                description: description?,
                price: price?,
                category: category?,
                stock: stock?,
            })
        })
    }

    fn update_from_json(body: &JsonObject) -> Result<ProductUpdate, ValidationError> {
        let mut reader = FieldReader::update(body);
        let update = ProductUpdate {
            name: reader.optional_text("nombre"),
            description: reader.optional_text("descripcion"),
            price: reader.optional_amount("precio"),
            category: reader.optional_text("categoria"),
            stock: reader.optional_count("stock"),
        };
        reader.finish(|| Some(update))
    }

    fn filter_for(keyword: &str, value: &str) -> Option<ProductFilter> {
        match keyword {
            "categoria" => Some(ProductFilter::Category(value.to_string())),
            _ => None,
        }
    }

    fn banner() -> Option<Value> {
        Some(json!({
            "message": "Microservicio de Productos",
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }
}
