//! Room Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::OrderSummary;

/// Room entity: a guest session identity keyed by number + surname
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i64,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    #[serde(rename = "activa")]
    pub is_active: bool,
}

/// Create room payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
}

/// Room login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomLogin {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "apellido")]
    pub surname: String,
}

/// Room with its orders, for the admin room listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomWithOrders {
    #[serde(flatten)]
    pub room: Room,
    #[serde(rename = "pedidos")]
    pub orders: Vec<OrderSummary>,
}
