//! Room Order Handlers

use axum::{extract::State, http::StatusCode};
use serde::Serialize;
use shared::models::{OrderCreate, OrderUpdate, OrderView, PendingTotal};

use crate::core::ServerState;
use crate::services::order as order_service;
use crate::utils::extract::{Json, Path};
use crate::{AppResult, CurrentRoom};

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConfirmedResponse {
    pub message: &'static str,
    pub confirmados: u64,
}

/// POST /api/pedidos/
pub async fn create(
    State(state): State<ServerState>,
    room: CurrentRoom,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderView>)> {
    let view = order_service::create_order(state.pool(), &room, payload).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/pedidos/pendientes
pub async fn list_pending(
    State(state): State<ServerState>,
    room: CurrentRoom,
) -> AppResult<Json<Vec<OrderView>>> {
    Ok(Json(order_service::list_pending(state.pool(), &room).await?))
}

/// GET /api/pedidos/pendientes/total
pub async fn pending_total(
    State(state): State<ServerState>,
    room: CurrentRoom,
) -> AppResult<Json<PendingTotal>> {
    Ok(Json(order_service::pending_total(state.pool(), &room).await?))
}

/// PUT /api/pedidos/{id}
pub async fn update(
    State(state): State<ServerState>,
    room: CurrentRoom,
    Path(id): Path<i64>,
    Json(patch): Json<OrderUpdate>,
) -> AppResult<Json<OrderView>> {
    Ok(Json(order_service::update_order(state.pool(), &room, id, patch).await?))
}

/// DELETE /api/pedidos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    room: CurrentRoom,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedResponse>> {
    order_service::delete_order(state.pool(), &room, id).await?;
    Ok(Json(DeletedResponse {
        message: "Pedido eliminado",
    }))
}

/// POST /api/pedidos/confirmar
pub async fn confirm(
    State(state): State<ServerState>,
    room: CurrentRoom,
) -> AppResult<Json<ConfirmedResponse>> {
    let confirmados = order_service::confirm_pending(state.pool(), &room).await?;
    Ok(Json(ConfirmedResponse {
        message: "Pedidos confirmados exitosamente",
        confirmados,
    }))
}
