use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::stock_unit::StockUnit;

/// A purchasable configuration of a product (e.g. a "1 Month" plan) with
/// its own price and stock pool. Stock order is significant: consumption is
/// first-available in array order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub label: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub stock: Vec<StockUnit>,
}

impl Variant {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Variant {
            label: label.into(),
            price,
            original_price: None,
            stock: Vec::new(),
        }
    }

    pub fn with_stock(mut self, stock: Vec<StockUnit>) -> Self {
        self.stock = stock;
        self
    }

    /// Whether this variant carries per-unit serialized stock at all.
    /// A variant with an empty stock array is a flat digital good and falls
    /// back to the product-level delivery payload.
    pub fn has_stock(&self) -> bool {
        !self.stock.is_empty()
    }

    /// Positions of available units, in ascending array order.
    pub fn available_indices(&self) -> Vec<usize> {
        self.stock
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.is_available())
            .map(|(i, _)| i)
            .collect()
    }

    /// Single source of truth for "how many units can still be sold",
    /// shared by the pre-admission check and the fulfillment engine.
    pub fn available_count(&self) -> usize {
        self.stock.iter().filter(|unit| unit.is_available()).count()
    }

    /// Consume up to `quantity` available units, first-available in array
    /// order, marking each as delivered to `order_id`. Returns the delivery
    /// transcript text of every unit actually consumed; fewer entries than
    /// `quantity` means a partial fill.
    pub fn consume(
        &mut self,
        quantity: usize,
        order_id: &str,
        delivered_at: SystemTime,
    ) -> Vec<String> {
        let indices = self.available_indices();
        let mut transcripts = Vec::with_capacity(quantity.min(indices.len()));
        for &i in indices.iter().take(quantity) {
            let unit = &mut self.stock[i];
            unit.mark_delivered(order_id, delivered_at);
            transcripts.push(unit.transcript());
        }
        transcripts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitStatus;

    fn variant_with(contents: &[&str]) -> Variant {
        Variant::new("1 Month", 9.99)
            .with_stock(contents.iter().map(|c| StockUnit::new(*c)).collect())
    }

    #[test]
    fn available_indices_skip_delivered_units() {
        let mut variant = variant_with(&["a", "b", "c", "d"]);
        variant.stock[0].mark_delivered("other", SystemTime::now());
        variant.stock[2].mark_delivered("other", SystemTime::now());

        assert_eq!(variant.available_indices(), vec![1, 3]);
        assert_eq!(variant.available_count(), 2);
    }

    #[test]
    fn consume_is_fifo_by_position() {
        let mut variant = variant_with(&["a", "b", "c", "d"]);
        variant.stock[0].mark_delivered("other", SystemTime::now());
        variant.stock[2].mark_delivered("other", SystemTime::now());

        let delivered = variant.consume(2, "order-1", SystemTime::now());
        assert_eq!(delivered, vec!["b".to_string(), "d".to_string()]);
        assert_eq!(variant.stock[1].status, UnitStatus::Delivered);
        assert_eq!(variant.stock[1].order_id.as_deref(), Some("order-1"));
        assert_eq!(variant.stock[3].status, UnitStatus::Delivered);
    }

    #[test]
    fn consume_partial_when_short() {
        let mut variant = variant_with(&["only"]);
        let delivered = variant.consume(3, "order-2", SystemTime::now());
        assert_eq!(delivered.len(), 1);
        assert_eq!(variant.available_count(), 0);
    }

    #[test]
    fn consume_nothing_when_exhausted() {
        let mut variant = variant_with(&["x"]);
        variant.consume(1, "order-3", SystemTime::now());
        assert!(variant.consume(1, "order-4", SystemTime::now()).is_empty());
        assert_eq!(variant.stock[0].order_id.as_deref(), Some("order-3"));
    }
}
