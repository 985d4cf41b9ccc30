use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single cart line as persisted under the products key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

/// Catalog entry handed to `add_to_cart`. Quantity is owned by the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLineItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl NewLineItem {
    pub fn into_line_item(self, quantity: u32) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

/// Decodes a persisted products payload.
pub fn decode_products(payload: &str) -> serde_json::Result<Vec<LineItem>> {
    serde_json::from_str(payload)
}

/// Encodes products into the persisted payload format.
pub fn encode_products(products: &[LineItem]) -> serde_json::Result<String> {
    serde_json::to_string(products)
}
