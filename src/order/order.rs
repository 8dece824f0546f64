use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::status::OrderStatus;

/// A customer order as the fulfillment core sees it: validated line items,
/// a lifecycle status, and the accumulated delivery transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<String>,
}

impl Order {
    pub fn new(id: impl Into<String>) -> Self {
        Order {
            id: id.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            delivery_info: None,
        }
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }
}
