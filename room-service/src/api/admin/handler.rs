//! Admin API Handlers

use axum::{body::Bytes, extract::State};
use serde::Deserialize;
use shared::models::{
    AdminProfile, Category, CategoryCreate, OrderStatus, OrderView, ProductCreate,
    ProductUpdate, ProductWithCategory, Room, RoomCreate, RoomWithOrders,
};

use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::services::{catalog, order as order_service, room as room_service};
use crate::utils::extract::{Json, Path, Query};
use crate::{AppError, AppResult, CurrentAdmin, ErrorCode};

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub estado: Option<String>,
    pub desde: Option<String>,
    pub hasta: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub estado: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    estado: Option<String>,
}

/// Parse a wire status label ("pendiente", "entregado", ...)
fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|_| AppError::validation(format!("Estado inválido: {raw}")))
}

/// GET /api/admin/habitaciones/
pub async fn list_rooms(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<RoomWithOrders>>> {
    Ok(Json(room_service::list_rooms_with_orders(state.pool()).await?))
}

/// POST /api/admin/habitaciones/
pub async fn create_room(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    let room = room_service::create_room(state.pool(), payload).await?;
    tracing::info!(admin = %admin.username, room_id = room.id, "Admin created room");
    Ok(Json(room))
}

/// GET /api/admin/pedidos/
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<OrderView>>> {
    let status = query
        .estado
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_status)
        .transpose()?;

    let orders = order_service::list_all(
        state.pool(),
        status,
        query.desde.as_deref(),
        query.hasta.as_deref(),
    )
    .await?;
    Ok(Json(orders))
}

/// PUT /api/admin/pedidos/{id} - `?estado=` wins over the JSON body
pub async fn set_order_status(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
    body: Bytes,
) -> AppResult<Json<OrderView>> {
    let raw = match query.estado.filter(|s| !s.trim().is_empty()) {
        Some(estado) => Some(estado),
        None if body.is_empty() => None,
        None => serde_json::from_slice::<StatusBody>(&body)
            .map_err(|e| AppError::invalid_request(format!("Cuerpo inválido: {e}")))?
            .estado,
    };
    let raw = raw.ok_or_else(|| AppError::validation("estado es requerido"))?;
    let status = parse_status(&raw)?;

    let view = order_service::set_order_status(state.pool(), id, status).await?;
    tracing::info!(admin = %admin.username, order_id = id, status = %status, "Admin set order status");
    Ok(Json(view))
}

/// POST /api/admin/productos/
pub async fn create_product(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ProductWithCategory>> {
    Ok(Json(catalog::create_product(state.pool(), payload).await?))
}

/// PUT /api/admin/productos/{id}
pub async fn update_product(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductUpdate>,
) -> AppResult<Json<ProductWithCategory>> {
    Ok(Json(catalog::update_product(state.pool(), id, patch).await?))
}

/// POST /api/admin/categorias/
pub async fn create_category(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    Ok(Json(catalog::create_category(state.pool(), payload).await?))
}

/// GET /api/admin/me
pub async fn me(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
) -> AppResult<Json<AdminProfile>> {
    let user = admin_user::find_by_id(state.pool(), admin.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AccountDisabled))?;
    Ok(Json(AdminProfile::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_uses_wire_labels() {
        assert_eq!(parse_status("entregado").unwrap(), OrderStatus::Delivered);
        assert_eq!(parse_status(" en_proceso ").unwrap(), OrderStatus::InProcess);
        let err = parse_status("delivered").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
