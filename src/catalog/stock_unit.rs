use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Delivery state of a single stock unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    Available,
    Delivered,
}

/// One deliverable credential: a code or account payload, optionally with
/// an uploaded image reference (e.g. a screenshot of the code).
///
/// Older catalogs stored units as bare strings. Those are upgraded to the
/// structured form at deserialization time, so everything downstream works
/// with one shape. A unit with no recorded status is treated as available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StockUnitWire")]
pub struct StockUnit {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub status: UnitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<SystemTime>,
}

impl StockUnit {
    /// A fresh, available unit with the given payload text.
    pub fn new(content: impl Into<String>) -> Self {
        StockUnit {
            content: content.into(),
            image_ref: None,
            status: UnitStatus::Available,
            order_id: None,
            delivered_at: None,
        }
    }

    /// Attach an image reference to the unit.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.status == UnitStatus::Available
    }

    /// Consume the unit for an order.
    pub fn mark_delivered(&mut self, order_id: &str, delivered_at: SystemTime) {
        self.status = UnitStatus::Delivered;
        self.order_id = Some(order_id.to_string());
        self.delivered_at = Some(delivered_at);
    }

    /// Put the unit back into the available pool, clearing its delivery
    /// bookkeeping. The unit keeps its position in the stock array.
    pub fn restore(&mut self) {
        self.status = UnitStatus::Available;
        self.order_id = None;
        self.delivered_at = None;
    }

    /// The text handed to the buyer when this unit is delivered.
    pub fn transcript(&self) -> String {
        match &self.image_ref {
            Some(image) => format!("{}\n[image] {}", self.content, image),
            None => self.content.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StockUnitWire {
    // Legacy encoding: just the payload text.
    Legacy(String),
    Structured {
        #[serde(default)]
        content: String,
        #[serde(default)]
        image_ref: Option<String>,
        #[serde(default)]
        status: UnitStatus,
        #[serde(default)]
        order_id: Option<String>,
        #[serde(default)]
        delivered_at: Option<SystemTime>,
    },
}

impl From<StockUnitWire> for StockUnit {
    fn from(wire: StockUnitWire) -> Self {
        match wire {
            StockUnitWire::Legacy(content) => StockUnit::new(content),
            StockUnitWire::Structured {
                content,
                image_ref,
                status,
                order_id,
                delivered_at,
            } => StockUnit {
                content,
                image_ref,
                status,
                order_id,
                delivered_at,
            },
        }
    }
}
