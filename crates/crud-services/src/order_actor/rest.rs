//! JSON binding for orders. `total` and `estado` are not accepted on create; the first is
//! derived and the second always starts as `pendiente`.

use crate::http::RestResource;
use crate::model::{Order, OrderCreate, OrderFilter, OrderUpdate};
use crate::validation::{FieldReader, JsonObject, ValidationError};

impl RestResource for Order {
    const LABEL: &'static str = "Pedido";
    const FILTERS: &'static [&'static str] = &["estado", "cliente"];

    fn create_from_json(body: &JsonObject) -> Result<OrderCreate, ValidationError> {
        let mut reader = FieldReader::create(body);
        let customer_id = reader.required_id("cliente_id");
        let items = reader.required_line_items("productos");
        let delivery_address = reader.required_text("direccion_entrega");
        reader.finish(|| {
            Some(OrderCreate {
                customer_id: customer_id?,
                items: items?,
                delivery_address: delivery_address?,
            })
        })
    }

    fn update_from_json(body: &JsonObject) -> Result<OrderUpdate, ValidationError> {
        let mut reader = FieldReader::update(body);
        let update = OrderUpdate {
            status: reader.optional_text("estado"),
            delivery_address: reader.optional_text("direccion_entrega"),
            items: reader.optional_line_items("productos"),
        };
        reader.finish(|| Some(update))
    }

    /// `cliente` takes a numeric id; anything else is not a route.
    fn filter_for(keyword: &str, value: &str) -> Option<OrderFilter> {
        match keyword {
            "estado" => Some(OrderFilter::Status(value.to_string())),
            "cliente" => value.parse().ok().map(OrderFilter::Customer),
            _ => None,
        }
    }
}
