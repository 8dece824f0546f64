mod engine;
mod reversal;

pub use engine::{fulfill, FulfillmentOutcome};
pub use reversal::restore_stock;
