//! Cart domain model

use serde::{Deserialize, Serialize};

use super::Product;

/// Smallest quantity a cart line can hold
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity a cart line can hold
pub const MAX_QUANTITY: u32 = 99;

/// Clamp any requested quantity into the allowed range
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32
}

/// One product in a shopper's cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(alias = "id")]
    pub product_id: String,
    #[serde(alias = "qty")]
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: clamp_quantity(i64::from(quantity)),
        }
    }

    /// Apply a signed change, staying within [1, 99]
    ///
    /// Decrementing a line at 1 leaves it at 1; removing a line is a
    /// separate, explicit operation.
    pub fn adjust(&mut self, delta: i64) {
        self.quantity = clamp_quantity(i64::from(self.quantity).saturating_add(delta));
    }
}

/// A cart line joined against its catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetail {
    #[serde(alias = "id")]
    pub product_id: String,
    pub title: String,
    #[serde(alias = "price")]
    pub unit_price: i64,
    #[serde(alias = "qty")]
    pub quantity: u32,
    #[serde(alias = "total")]
    pub line_total: i64,
}

impl LineDetail {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        let quantity = clamp_quantity(i64::from(quantity));
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            unit_price: product.price,
            quantity,
            line_total: product.price * i64::from(quantity),
        }
    }
}

/// Priced view of a cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<LineDetail>,
    pub grand_total: i64,
}

impl CartSummary {
    pub fn new(lines: Vec<LineDetail>) -> Self {
        let grand_total = lines.iter().map(|l| l.line_total).sum();
        Self { lines, grand_total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
