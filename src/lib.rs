mod catalog;
mod fulfillment;
mod lock;
mod notify;
mod order;
mod service;
mod store;

pub use catalog::{Product, StockUnit, UnitStatus, Variant};
pub use fulfillment::{fulfill, restore_stock, FulfillmentOutcome};
pub use lock::{LockError, OrderLock, OrderLockGuard};
#[cfg(feature = "emitter")]
pub use notify::EmitterNotifier;
pub use notify::{LogNotifier, Notification, Notifier, NotifyError};
pub use order::{LineItem, Order, OrderStatus};
pub use service::{OrderService, ServiceError};
pub use store::{
    CatalogStore, InMemoryCatalogStore, InMemoryOrderStore, JsonFileStore, OrderStore, StoreError,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
