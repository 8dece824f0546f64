use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// A catalog entry owning zero or more variants, plus an optional
/// product-wide fallback delivery payload for flat digital goods that have
/// no per-unit serialized stock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delivery_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delivery_image: Option<String>,
    /// When set, order admission requires at least one available unit in
    /// the matching variant.
    #[serde(default)]
    pub auto_stock_out: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            variants: Vec::new(),
            auto_delivery_info: None,
            auto_delivery_image: None,
            auto_stock_out: false,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn with_auto_delivery(mut self, info: impl Into<String>) -> Self {
        self.auto_delivery_info = Some(info.into());
        self
    }

    pub fn with_auto_stock_out(mut self) -> Self {
        self.auto_stock_out = true;
        self
    }

    /// Line items reference products by id when they have one, with the
    /// product name as the legacy fallback key.
    pub fn matches(&self, product_id: Option<&str>, name: &str) -> bool {
        product_id == Some(self.id.as_str()) || self.name == name
    }

    pub fn find_variant(&self, label: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.label == label)
    }

    pub fn find_variant_mut(&mut self, label: &str) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| v.label == label)
    }

    /// Static delivery text for flat digital goods, with the optional
    /// image reference appended.
    pub fn fallback_transcript(&self) -> Option<String> {
        let info = self.auto_delivery_info.as_deref()?;
        Some(match self.auto_delivery_image.as_deref() {
            Some(image) => format!("{}\n[image] {}", info, image),
            None => info.to_string(),
        })
    }
}
