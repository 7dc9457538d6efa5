//! Derived order fields.

use crate::model::LineItem;

/// Sum of `quantity * unit_price` over every line item.
pub fn order_total(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| f64::from(item.quantity) * item.unit_price)
        .sum()
}
