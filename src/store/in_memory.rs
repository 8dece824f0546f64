use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::Product;
use crate::order::Order;

use super::traits::{CatalogStore, OrderStore};
use super::StoreError;

/// In-memory catalog store. Clones share the same underlying storage, so a
/// test can keep a handle while handing another to the service.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        InMemoryCatalogStore {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog read"))?;
        Ok(products.clone())
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut storage = self
            .products
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog write"))?;
        *storage = products.to_vec();
        Ok(())
    }
}

/// In-memory order store keyed by order id.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StoreError::LockPoisoned("order read"))?;
        Ok(orders.get(id).cloned())
    }

    fn put(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| StoreError::LockPoisoned("order write"))?;
        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    fn all(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StoreError::LockPoisoned("order read"))?;
        Ok(orders.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_save_then_load() {
        let store = InMemoryCatalogStore::new();
        assert!(store.load().unwrap().is_empty());

        let products = vec![Product::new("p1", "Netflix")];
        store.save(&products).unwrap();
        assert_eq!(store.load().unwrap(), products);
    }

    #[test]
    fn clones_share_storage() {
        let store = InMemoryCatalogStore::new();
        let other = store.clone();
        store.save(&[Product::new("p1", "Netflix")]).unwrap();
        assert_eq!(other.load().unwrap().len(), 1);
    }

    #[test]
    fn order_put_get_all() {
        let store = InMemoryOrderStore::new();
        assert!(store.get("o1").unwrap().is_none());

        let order = Order::new("o1");
        store.put(&order).unwrap();
        assert_eq!(store.get("o1").unwrap(), Some(order));
        assert_eq!(store.all().unwrap().len(), 1);
    }
}
