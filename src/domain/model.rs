use serde::{Deserialize, Serialize};

/// Billing period of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "Y")]
    Yearly,
    #[serde(rename = "M")]
    Monthly,
}

/// Text fragments pulled out of one product node. `None` means the
/// sub-selector matched nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_text: Option<String>,
    pub frequency_text: Option<String>,
    pub discount_text: Option<String>,
    pub discount_frequency_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Price normalized to a yearly cadence; only used for ranking.
    pub annual_price: f64,
    pub frequency: Frequency,
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_frequency: Option<Frequency>,
}

/// CSS selectors used to locate products and their fields. Everything
/// except `product` is relative to a product node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub product: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub frequency: String,
    pub discount: String,
    pub discount_frequency: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            product: ".widget .pricing-table .package".to_string(),
            title: ".header h3".to_string(),
            description: ".package-features .package-name".to_string(),
            price: ".package-price .price-big".to_string(),
            frequency: ".package-price".to_string(),
            discount: ".package-price p".to_string(),
            discount_frequency: ".package-price p".to_string(),
        }
    }
}
