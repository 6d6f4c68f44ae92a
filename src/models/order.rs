use serde::Serialize;

use crate::models::Extra;

/// Body for `POST /orders`.
///
/// `price` is the base price scaled by the item quantity only; extras ride
/// along as line items with their final quantities and are not folded into
/// this field.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    pub product_id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u64,
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}
