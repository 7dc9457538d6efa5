//! # Request Validation
//!
//! Turns a raw JSON request body into a resource's `Create`/`Update` payload, or into a
//! [`ValidationError`] naming every offending field. Nothing reaches the store until the
//! whole body has been checked, so a create or update never applies partially.
//!
//! A [`FieldReader`] is opened in one of two modes:
//!
//! | Mode | Missing field | `null` / `""` / `[]` | Present value |
//! |------|---------------|----------------------|---------------|
//! | [`FieldReader::create`] | invalid if required | same as missing | must pass the rule |
//! | [`FieldReader::update`] | kept | same as missing | must pass the rule |
//!
//! ```rust
//! use crud_services::validation::{parse_body, FieldReader};
//!
//! let body = parse_body(br#"{"nombre": "Ana", "email": "no-at-sign"}"#).unwrap();
//! let mut reader = FieldReader::create(&body);
//! let name = reader.required_text("nombre");
//! let email = reader.required_email("email");
//! let err = reader.finish(|| Some((name?, email?))).unwrap_err();
//! assert_eq!(err.fields, vec!["email"]);
//! ```

use crate::model::LineItem;
use crate::order_actor::pricing::order_total;
use crud_framework::EntityId;
use serde_json::Value;
use thiserror::Error;

pub type JsonObject = serde_json::Map<String, Value>;

/// Field name reported when the body itself is unusable.
pub const BODY_FIELD: &str = "body";

/// The request body failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fields: {}", fields.join(", "))]
pub struct ValidationError {
    /// Offending field names, in the order they were checked.
    pub fields: Vec<String>,
}

impl ValidationError {
    pub fn body() -> Self {
        Self {
            fields: vec![BODY_FIELD.to_string()],
        }
    }
}

/// Parses a request body into a JSON object. An empty body reads as `{}`.
pub fn parse_body(raw: &[u8]) -> Result<JsonObject, ValidationError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }
    match serde_json::from_slice(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ValidationError::body()),
    }
}

/// Reads typed fields out of a JSON object, collecting every invalid one.
#[derive(Debug)]
pub struct FieldReader<'a> {
    body: &'a JsonObject,
    invalid: Vec<String>,
}

impl<'a> FieldReader<'a> {
    /// Reader for a create payload.
    pub fn create(body: &'a JsonObject) -> Self {
        Self {
            body,
            invalid: Vec::new(),
        }
    }

    /// Reader for a merge-patch update. Only the `optional_*` readers make sense here.
    pub fn update(body: &'a JsonObject) -> Self {
        Self::create(body)
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        match self.body.get(field)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            value => Some(value),
        }
    }

    fn reject(&mut self, field: impl Into<String>) {
        self.invalid.push(field.into());
    }

    fn read<T>(&mut self, field: &str, required: bool, parse: fn(&Value) -> Option<T>) -> Option<T> {
        let Some(value) = self.present(field) else {
            if required {
                self.reject(field);
            }
            return None;
        };
        let parsed = parse(value);
        if parsed.is_none() {
            self.reject(field);
        }
        parsed
    }

    pub fn required_text(&mut self, field: &str) -> Option<String> {
        self.read(field, true, text)
    }

    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        self.read(field, false, text)
    }

    pub fn required_email(&mut self, field: &str) -> Option<String> {
        self.read(field, true, email)
    }

    pub fn optional_email(&mut self, field: &str) -> Option<String> {
        self.read(field, false, email)
    }

    pub fn required_id(&mut self, field: &str) -> Option<EntityId> {
        self.read(field, true, positive_id)
    }

    pub fn required_amount(&mut self, field: &str) -> Option<f64> {
        self.read(field, true, amount)
    }

    pub fn optional_amount(&mut self, field: &str) -> Option<f64> {
        self.read(field, false, amount)
    }

    pub fn required_count(&mut self, field: &str) -> Option<u32> {
        self.read(field, true, count)
    }

    pub fn optional_count(&mut self, field: &str) -> Option<u32> {
        self.read(field, false, count)
    }

    pub fn optional_flag(&mut self, field: &str) -> Option<bool> {
        self.read(field, false, Value::as_bool)
    }

    pub fn required_line_items(&mut self, field: &str) -> Option<Vec<LineItem>> {
        match self.present(field) {
            Some(value) => self.line_items(field, value),
            None => {
                self.reject(field);
                None
            }
        }
    }

    pub fn optional_line_items(&mut self, field: &str) -> Option<Vec<LineItem>> {
        let value = self.present(field)?;
        self.line_items(field, value)
    }

    fn line_items(&mut self, field: &str, value: &Value) -> Option<Vec<LineItem>> {
        let Some(raw_items) = value.as_array() else {
            self.reject(field);
            return None;
        };

        let mut items = Vec::with_capacity(raw_items.len());
        let mut all_valid = true;
        for (index, raw) in raw_items.iter().enumerate() {
            let Some(object) = raw.as_object() else {
                self.reject(format!("{field}[{index}]"));
                all_valid = false;
                continue;
            };
            let prefix = format!("{field}[{index}]");
            let product_id = self.item_field(object, &prefix, "producto_id", positive_id);
            let quantity = self.item_field(object, &prefix, "cantidad", positive_count);
            let unit_price = self.item_field(object, &prefix, "precio_unitario", amount);

            match (product_id, quantity, unit_price) {
                (Some(product_id), Some(quantity), Some(unit_price)) => items.push(LineItem {
                    product_id,
                    quantity,
                    unit_price,
                }),
                _ => all_valid = false,
            }
        }
        if !all_valid {
            return None;
        }
        // Each price is finite on its own, but the sum can still overflow.
        if !order_total(&items).is_finite() {
            self.reject(field);
            return None;
        }
        Some(items)
    }

    fn item_field<T>(
        &mut self,
        item: &JsonObject,
        prefix: &str,
        name: &str,
        parse: fn(&Value) -> Option<T>,
    ) -> Option<T> {
        let parsed = item.get(name).and_then(parse);
        if parsed.is_none() {
            self.reject(format!("{prefix}.{name}"));
        }
        parsed
    }

    /// Returns the fields rejected so far.
    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid
    }

    /// Completes the read. `build` assembles the payload from the values read; it is only
    /// called when every field passed.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        if !self.invalid.is_empty() {
            return Err(ValidationError {
                fields: self.invalid,
            });
        }
        build().ok_or_else(ValidationError::body)
    }
}

fn text(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn email(value: &Value) -> Option<String> {
    let address = text(value)?;
    let (local, domain) = address.split_once('@')?;
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !address.chars().any(char::is_whitespace);
    well_formed.then_some(address)
}

fn positive_id(value: &Value) -> Option<EntityId> {
    value.as_u64().filter(|id| *id > 0)
}

fn count(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn positive_count(value: &Value) -> Option<u32> {
    count(value).filter(|n| *n > 0)
}

fn amount(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite() && *n >= 0.0)
}
