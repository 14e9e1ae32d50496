//! Category Model

use serde::{Deserialize, Serialize};

use super::product::ProductSummary;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    /// Display position; ties are broken by id
    #[serde(rename = "orden")]
    pub sort_order: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "icono", default)]
    pub icon: Option<String>,
    #[serde(rename = "orden", default)]
    pub sort_order: Option<i64>,
}

/// Category with its products eagerly loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    #[serde(rename = "productos")]
    pub products: Vec<ProductSummary>,
}
