mod error;
mod order_lock;

pub use error::LockError;
pub use order_lock::{OrderLock, OrderLockGuard};
