mod product;
mod stock_unit;
mod variant;

pub use product::Product;
pub use stock_unit::{StockUnit, UnitStatus};
pub use variant::Variant;
