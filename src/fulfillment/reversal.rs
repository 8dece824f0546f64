use crate::catalog::Product;

/// Return every stock unit consumed by `order_id` to the available pool.
///
/// Scans the whole catalog, matching purely on the recorded `order_id`, so
/// one call restores all units an order consumed across every product and
/// variant. Restored units keep their array positions and are immediately
/// eligible for FIFO consumption again. Returns whether anything changed
/// so the caller can skip persistence; reversing twice is a no-op.
pub fn restore_stock(order_id: &str, catalog: &mut [Product]) -> bool {
    let mut changed = false;
    for product in catalog.iter_mut() {
        for variant in product.variants.iter_mut() {
            for unit in variant.stock.iter_mut() {
                if unit.order_id.as_deref() == Some(order_id) {
                    unit.restore();
                    changed = true;
                }
            }
        }
    }
    changed
}
