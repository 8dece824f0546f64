use crate::catalog::Product;
use crate::order::Order;

use super::StoreError;

/// Backing store for the product catalog.
///
/// The storage contract is deliberately flat: read everything, write
/// everything. Stock mutation happens in memory inside the order-lock
/// critical section and the whole catalog is written back, so the store
/// never needs a targeted update API.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, StoreError>;
    fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}

/// Backing store for orders.
pub trait OrderStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Order>, StoreError>;
    fn put(&self, order: &Order) -> Result<(), StoreError>;
    fn all(&self) -> Result<Vec<Order>, StoreError>;
}
