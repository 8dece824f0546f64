//! Order lifecycle orchestration.
//!
//! `OrderService` ties the core pieces together: the pre-admission stock
//! check, the lock-guarded create path (load catalog, run auto-delivery,
//! persist), the status-update path that restores stock on cancellation,
//! and the notification hooks fired at each boundary.

mod error;
mod order_service;

pub use error::ServiceError;
pub use order_service::OrderService;
