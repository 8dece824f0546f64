mod line_item;
mod order;
mod status;

pub use line_item::LineItem;
pub use order::Order;
pub use status::OrderStatus;
