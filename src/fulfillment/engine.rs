//! Auto-delivery engine: consumes available stock units against an order's
//! line items and reports the delivery transcript plus the resulting order
//! status. Fulfillment is best-effort by design: a line that cannot be
//! matched or fully stocked degrades the outcome to `Processing` for manual
//! follow-up, it never fails the order.

use std::time::SystemTime;

use crate::catalog::Product;
use crate::order::{LineItem, Order, OrderStatus};

/// What `fulfill` reports back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FulfillmentOutcome {
    pub status: OrderStatus,
    pub delivery_info: Option<String>,
    /// True iff at least one stock unit was consumed; the caller persists
    /// the catalog only then.
    pub catalog_changed: bool,
}

impl FulfillmentOutcome {
    fn unchanged(order: &Order) -> Self {
        FulfillmentOutcome {
            status: order.status,
            delivery_info: order.delivery_info.clone(),
            catalog_changed: false,
        }
    }
}

/// Run auto-delivery for `order` against `catalog`, mutating variant stock
/// in place.
///
/// Per line item, in order: match a product by id (name as legacy
/// fallback), then a variant by label. A matched variant with serialized
/// stock gets FIFO consumption; a product without one falls back to its
/// static delivery payload. Items that match nothing, or that cannot be
/// fully stocked, leave the order `Processing`; an order whose items
/// trigger neither path keeps its current status untouched, flagging it
/// for manual handling.
pub fn fulfill(order: &Order, catalog: &mut [Product]) -> FulfillmentOutcome {
    if order.items.is_empty() {
        return FulfillmentOutcome::unchanged(order);
    }

    let delivered_at = SystemTime::now();
    let mut has_auto_items = false;
    let mut all_delivered = true;
    let mut catalog_changed = false;
    let mut blocks: Vec<String> = Vec::new();

    for item in &order.items {
        let Some(product) = find_product_mut(catalog, item) else {
            all_delivered = false;
            continue;
        };

        let product_name = product.name.clone();
        let stocked_variant = item
            .variant
            .as_deref()
            .and_then(|label| product.find_variant_mut(label))
            .filter(|variant| variant.has_stock());

        if let Some(variant) = stocked_variant {
            has_auto_items = true;
            let wanted = item.quantity as usize;
            let delivered = variant.consume(wanted, &order.id, delivered_at);
            if delivered.len() < wanted {
                all_delivered = false;
            }
            if !delivered.is_empty() {
                catalog_changed = true;
                blocks.push(format!(
                    "{} ({}):\n{}",
                    product_name,
                    variant.label,
                    delivered.join("\n\n")
                ));
            }
            continue;
        }

        // No stock-bearing variant matched: flat digital goods deliver the
        // product-level payload, regardless of quantity.
        match product.fallback_transcript() {
            Some(text) => {
                has_auto_items = true;
                blocks.push(format!("{}:\n{}", product_name, text));
            }
            None => all_delivered = false,
        }
    }

    if !has_auto_items {
        // Nothing here is auto-deliverable; the order keeps its status and
        // waits for a human.
        return FulfillmentOutcome {
            catalog_changed,
            ..FulfillmentOutcome::unchanged(order)
        };
    }

    let status = if all_delivered {
        OrderStatus::Completed
    } else {
        OrderStatus::Processing
    };
    let delivery_info = if blocks.is_empty() {
        order.delivery_info.clone()
    } else {
        Some(blocks.join("\n\n"))
    };

    FulfillmentOutcome {
        status,
        delivery_info,
        catalog_changed,
    }
}

fn find_product_mut<'a>(catalog: &'a mut [Product], item: &LineItem) -> Option<&'a mut Product> {
    catalog
        .iter_mut()
        .find(|p| p.matches(item.product_id.as_deref(), &item.name))
}
