//! Error types for order lifecycle operations.

use std::error::Error;
use std::fmt;

use crate::lock::LockError;
use crate::notify::NotifyError;
use crate::store::StoreError;

/// Error type for `OrderService` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Admission rejected: the product enforces stock-gated checkout and
    /// the matching variant has no available units.
    OutOfStock { product: String, variant: String },
    /// No order with this id.
    OrderNotFound(String),
    /// Catalog or order store failure.
    Store(StoreError),
    /// Order lock failure.
    Lock(LockError),
    /// Notification delivery failure.
    Notify(NotifyError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::OutOfStock { product, variant } => {
                write!(f, "out of stock: {} ({})", product, variant)
            }
            ServiceError::OrderNotFound(id) => write!(f, "order not found: {}", id),
            ServiceError::Store(e) => write!(f, "store error: {}", e),
            ServiceError::Lock(e) => write!(f, "lock error: {}", e),
            ServiceError::Notify(e) => write!(f, "notify error: {}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Store(e) => Some(e),
            ServiceError::Lock(e) => Some(e),
            ServiceError::Notify(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

impl From<LockError> for ServiceError {
    fn from(err: LockError) -> Self {
        ServiceError::Lock(err)
    }
}

impl From<NotifyError> for ServiceError {
    fn from(err: NotifyError) -> Self {
        ServiceError::Notify(err)
    }
}
