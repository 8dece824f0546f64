//! Catalog and order fixtures shared across the integration suites.

#![allow(dead_code)]

use autostock::{LineItem, Order, Product, StockUnit, Variant};

pub fn variant(label: &str, contents: &[&str]) -> Variant {
    Variant::new(label, 9.99)
        .with_stock(contents.iter().map(|c| StockUnit::new(*c)).collect())
}

pub fn product(id: &str, name: &str, variants: Vec<Variant>) -> Product {
    let mut product = Product::new(id, name);
    for v in variants {
        product = product.with_variant(v);
    }
    product
}

/// A flat digital good: no serialized stock, static delivery text.
pub fn flat_product(id: &str, name: &str, info: &str) -> Product {
    Product::new(id, name).with_auto_delivery(info)
}

pub fn item(product_id: &str, name: &str, variant_label: &str, quantity: u32) -> LineItem {
    LineItem::new(product_id, name)
        .with_variant(variant_label)
        .with_quantity(quantity)
}

pub fn order(id: &str, items: Vec<LineItem>) -> Order {
    let mut order = Order::new(id);
    for i in items {
        order = order.with_item(i);
    }
    order
}
