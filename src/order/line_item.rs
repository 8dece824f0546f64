use serde::{Deserialize, Serialize};

/// One purchasable line of an order, as the fulfillment engine sees it.
///
/// Incoming orders accumulated three different keys for the selected
/// variant over the life of the original schema: `plan`, `variantName`,
/// and a nested `variant.label`. The deserializer collapses them into the
/// single canonical `variant` field here, honoring that priority order, so
/// matching downstream never has to know about the drift. Quantity is
/// likewise normalized at the boundary: absent, zero, or negative values
/// coerce to 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineItemWire")]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>) -> Self {
        LineItem {
            product_id: Some(product_id.into()),
            name: name.into(),
            variant: None,
            quantity: 1,
        }
    }

    pub fn with_variant(mut self, label: impl Into<String>) -> Self {
        self.variant = Some(label.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}

#[derive(Deserialize)]
struct LineItemWire {
    #[serde(default, alias = "id")]
    product_id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default, alias = "variantName")]
    variant_name: Option<String>,
    #[serde(default)]
    variant: Option<VariantKeyWire>,
    #[serde(default)]
    quantity: Option<i64>,
}

/// The canonical field is a plain label; the oldest schema nested it as an
/// object with a `label` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum VariantKeyWire {
    Label(String),
    Nested { label: String },
}

impl VariantKeyWire {
    fn into_label(self) -> String {
        match self {
            VariantKeyWire::Label(label) => label,
            VariantKeyWire::Nested { label } => label,
        }
    }
}

impl From<LineItemWire> for LineItem {
    fn from(wire: LineItemWire) -> Self {
        let variant = wire
            .plan
            .or(wire.variant_name)
            .or_else(|| wire.variant.map(VariantKeyWire::into_label));
        let quantity = wire
            .quantity
            .map(|q| q.clamp(1, i64::from(u32::MAX)) as u32)
            .unwrap_or(1);
        LineItem {
            product_id: wire.product_id,
            name: wire.name,
            variant,
            quantity,
        }
    }
}
