use crate::catalog::Product;
use crate::fulfillment::{fulfill, restore_stock};
use crate::lock::OrderLock;
use crate::notify::{Notification, Notifier, NotifyError};
use crate::order::{Order, OrderStatus};
use crate::store::{CatalogStore, OrderStore};

use super::error::ServiceError;

/// Orchestrates the order lifecycle over a catalog store, an order store,
/// and a notifier.
///
/// All stock-touching paths run inside the same FIFO order lock: two
/// concurrent submissions can never race each other for the last unit, and
/// a reversal can never interleave with a fresh consumption mid-write.
pub struct OrderService<C, O, N> {
    catalog: C,
    orders: O,
    notifier: N,
    lock: OrderLock,
}

impl<C, O, N> OrderService<C, O, N>
where
    C: CatalogStore,
    O: OrderStore,
    N: Notifier,
{
    pub fn new(catalog: C, orders: O, notifier: N) -> Self {
        OrderService {
            catalog,
            orders,
            notifier,
            lock: OrderLock::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn orders(&self) -> &O {
        &self.orders
    }

    /// Admit and fulfill an order.
    ///
    /// Inside the lock: load the catalog, run the pre-admission stock
    /// check, run auto-delivery, save the catalog iff any unit was
    /// consumed, and persist the order with the outcome merged in. The
    /// fulfillment itself is best-effort; only admission and storage
    /// failures surface as errors, and an admitted order is always
    /// persisted.
    pub fn place_order(&self, mut order: Order) -> Result<Order, ServiceError> {
        {
            let _guard = self.lock.acquire()?;
            let mut catalog = self.catalog.load()?;
            check_admission(&order, &catalog)?;

            let outcome = fulfill(&order, &mut catalog);
            if outcome.catalog_changed {
                self.catalog.save(&catalog)?;
            }
            order.status = outcome.status;
            order.delivery_info = outcome.delivery_info;
            self.orders.put(&order)?;
        }

        match order.status {
            OrderStatus::Completed => self.send("order:completed", &order)?,
            OrderStatus::Processing => self.send("order:processing", &order)?,
            _ => {}
        }
        Ok(order)
    }

    /// Transition an existing order to a new status.
    ///
    /// A transition into a terminal negative state (cancelled, refunded,
    /// failed) returns every unit the order consumed to the available
    /// pool; the catalog is only written back when something was actually
    /// restored, so repeating the transition is harmless.
    pub fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        let mut order = self
            .orders
            .get(order_id)?
            .ok_or_else(|| ServiceError::OrderNotFound(order_id.to_string()))?;
        order.status = status;

        if status.is_reversal() {
            let _guard = self.lock.acquire()?;
            let mut catalog = self.catalog.load()?;
            if restore_stock(order_id, &mut catalog) {
                self.catalog.save(&catalog)?;
            }
            self.orders.put(&order)?;
        } else {
            self.orders.put(&order)?;
        }

        self.send("order:status", &order)?;
        Ok(order)
    }

    fn send(&self, event: &str, order: &Order) -> Result<(), ServiceError> {
        let payload = serde_json::to_string(&Notification {
            order_id: order.id.clone(),
            status: order.status,
            delivery_info: order.delivery_info.clone(),
        })
        .map_err(|e| NotifyError::Encode(e.to_string()))?;
        self.notifier.notify(event, &payload)?;
        Ok(())
    }
}

/// Reject checkout outright when a stock-gated product cannot deliver a
/// single unit. Uses the same product/variant matching as the engine, so
/// the two sites can never disagree about what "available" means.
fn check_admission(order: &Order, catalog: &[Product]) -> Result<(), ServiceError> {
    for item in &order.items {
        let Some(product) = catalog
            .iter()
            .find(|p| p.matches(item.product_id.as_deref(), &item.name))
        else {
            continue;
        };
        if !product.auto_stock_out {
            continue;
        }
        let stocked_variant = item
            .variant
            .as_deref()
            .and_then(|label| product.find_variant(label))
            .filter(|variant| variant.has_stock());
        if let Some(variant) = stocked_variant {
            if variant.available_count() == 0 {
                return Err(ServiceError::OutOfStock {
                    product: product.name.clone(),
                    variant: variant.label.clone(),
                });
            }
        }
    }
    Ok(())
}
