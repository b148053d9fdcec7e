use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Stock-keeping unit (unique).
    pub sku: String,

    /// Display name.
    #[serde(rename = "productName")]
    pub name: String,

    /// Description.
    pub description: String,

    /// Net price.
    pub price: f64,

    /// Tax rate applied on top of the net price.
    pub tax_rate: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Input for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub sku: String,
    #[serde(rename = "productName")]
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax_rate: f64,
}
