//! Product Model

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    /// Unit price in currency units, always > 0
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "disponible")]
    pub is_available: bool,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
}

/// Compact product shape nested in category and order responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "disponible")]
    pub is_available: bool,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: p.price,
            image: p.image.clone(),
            is_available: p.is_available,
        }
    }
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            image: p.image,
            is_available: p.is_available,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Create product payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "disponible", default = "default_true")]
    pub is_available: bool,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
}

/// Update product payload (admin); absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
    #[serde(rename = "disponible", default)]
    pub is_available: Option<bool>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<i64>,
}

/// Product with its category, returned by admin create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "categoria")]
    pub category: Option<Category>,
}
