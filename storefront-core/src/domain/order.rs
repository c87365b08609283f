//! Order domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LineDetail;

/// A completed purchase
///
/// Line items are a snapshot taken at checkout, so later catalog changes
/// never alter an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "id")]
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub total: i64,
    #[serde(alias = "items")]
    pub line_items: Vec<LineDetail>,
}

impl Order {
    /// Build an order from priced lines with a fresh id and timestamp
    pub fn new(line_items: Vec<LineDetail>, total: i64) -> Self {
        Self {
            order_id: new_order_id(),
            created_at: Utc::now(),
            total,
            line_items,
        }
    }

    /// Sum of the line totals; equals `total` for every order this crate creates
    pub fn lines_total(&self) -> i64 {
        self.line_items.iter().map(|l| l.line_total).sum()
    }
}

/// Random v4 UUID, uppercased
pub fn new_order_id() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}
