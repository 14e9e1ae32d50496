//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductSummary;
use super::room::Room;

/// Order status
///
/// Stored as snake_case English in the database; exposed on the wire with
/// the Spanish labels the guest and admin frontends use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en_proceso")]
    InProcess,
    #[serde(rename = "entregado")]
    Delivered,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// Wire label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::InProcess => "en_proceso",
            Self::Delivered => "entregado",
            Self::Cancelled => "cancelado",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order entity (one product-quantity request from one room)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    #[serde(rename = "habitacion_id")]
    pub room_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "notas")]
    pub notes: Option<String>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "hora_entrega")]
    pub delivered_at: Option<DateTime<Utc>>,
}

fn default_quantity() -> i64 {
    1
}

/// Create order payload (room session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad", default = "default_quantity")]
    pub quantity: i64,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

/// `Some(None)` for an explicit `null`, `None` when the field is absent
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial order update (room session); absent fields are left unchanged
///
/// `notas: null` clears the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "cantidad", default)]
    pub quantity: Option<i64>,
    #[serde(
        rename = "notas",
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    #[serde(rename = "estado", default)]
    pub status: Option<OrderStatus>,
}

impl OrderUpdate {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.notes.is_none() && self.status.is_none()
    }
}

/// Flat row produced by the order ⋈ product ⋈ room query
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderDetailRow {
    pub id: i64,
    pub room_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,

    pub product_name: String,
    pub product_price: f64,
    pub product_image: Option<String>,
    pub product_is_available: bool,

    pub room_number: String,
    pub room_surname: String,
    pub room_phone: Option<String>,
    pub room_check_in: Option<DateTime<Utc>>,
    pub room_check_out: Option<DateTime<Utc>>,
    pub room_is_active: bool,
}

/// Full order response with its product and room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: i64,
    #[serde(rename = "habitacion_id")]
    pub room_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "notas")]
    pub notes: Option<String>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "hora_entrega")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(rename = "producto")]
    pub product: ProductSummary,
    #[serde(rename = "habitacion")]
    pub room: Room,
}

impl From<OrderDetailRow> for OrderView {
    fn from(row: OrderDetailRow) -> Self {
        Self {
            id: row.id,
            room_id: row.room_id,
            product_id: row.product_id,
            quantity: row.quantity,
            notes: row.notes,
            status: row.status,
            created_at: row.created_at,
            delivered_at: row.delivered_at,
            product: ProductSummary {
                id: row.product_id,
                name: row.product_name,
                price: row.product_price,
                image: row.product_image,
                is_available: row.product_is_available,
            },
            room: Room {
                id: row.room_id,
                number: row.room_number,
                surname: row.room_surname,
                phone: row.room_phone,
                check_in: row.room_check_in,
                check_out: row.room_check_out,
                is_active: row.room_is_active,
            },
        }
    }
}

/// Compact order shape nested in the admin room listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub id: i64,
    #[serde(skip)]
    pub room_id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "producto_nombre")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "hora_entrega")]
    pub delivered_at: Option<DateTime<Utc>>,
}

/// Count and money total of a room's pending orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTotal {
    #[serde(rename = "pedidos")]
    pub orders: i64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> OrderDetailRow {
        OrderDetailRow {
            id: 7,
            room_id: 1,
            product_id: 3,
            quantity: 2,
            notes: Some("sin hielo".into()),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivered_at: None,
            product_name: "Coca Cola".into(),
            product_price: 2.5,
            product_image: None,
            product_is_available: true,
            room_number: "101".into(),
            room_surname: "Gomez".into(),
            room_phone: None,
            room_check_in: None,
            room_check_out: None,
            room_is_active: true,
        }
    }

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Pending).unwrap(),
            "pendiente"
        );
        assert_eq!(
            serde_json::to_value(OrderStatus::InProcess).unwrap(),
            "en_proceso"
        );
        let status: OrderStatus = serde_json::from_str("\"entregado\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
        assert!(serde_json::from_str::<OrderStatus>("\"delivered\"").is_err());
    }

    #[test]
    fn test_order_view_projection() {
        let view = OrderView::from(sample_row());
        assert_eq!(view.product.id, 3);
        assert_eq!(view.room.id, 1);
        assert_eq!(view.room.number, "101");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["estado"], "pendiente");
        assert!(json["hora_entrega"].is_null());
        assert_eq!(json["notas"], "sin hielo");
        assert_eq!(json["producto"]["nombre"], "Coca Cola");
        assert_eq!(json["habitacion"]["apellido"], "Gomez");
        assert!(json["habitacion"].get("pedidos").is_none());
    }

    #[test]
    fn test_order_create_defaults() {
        let payload: OrderCreate = serde_json::from_str(r#"{"producto_id": 4}"#).unwrap();
        assert_eq!(payload.quantity, 1);
        assert!(payload.notes.is_none());
    }

    #[test]
    fn test_order_update_partial() {
        let patch: OrderUpdate = serde_json::from_str(r#"{"cantidad": 3}"#).unwrap();
        assert_eq!(patch.quantity, Some(3));
        assert!(patch.status.is_none());
        assert!(!patch.is_empty());
        assert!(patch.notes.is_none());
        assert!(OrderUpdate::default().is_empty());
    }

    #[test]
    fn test_order_update_null_note_clears() {
        let patch: OrderUpdate = serde_json::from_str(r#"{"notas": null}"#).unwrap();
        assert_eq!(patch.notes, Some(None));
        assert!(!patch.is_empty());

        let patch: OrderUpdate = serde_json::from_str(r#"{"notas": "sin sal"}"#).unwrap();
        assert_eq!(patch.notes, Some(Some("sin sal".to_string())));
    }
}
