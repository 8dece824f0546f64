//! Notification seam for order lifecycle events.
//!
//! The surrounding application sends the customer an e-mail when an order
//! completes or changes status; this crate stops at a `Notifier` trait the
//! service publishes through. `LogNotifier` logs to stdout or a buffer;
//! `EmitterNotifier` forwards to in-process subscribers via an
//! `EventEmitter` (requires the `emitter` feature).

#[cfg(feature = "emitter")]
mod emitter;
mod notifier;

#[cfg(feature = "emitter")]
pub use emitter::EmitterNotifier;
pub use notifier::{LogNotifier, Notification, Notifier, NotifyError};
