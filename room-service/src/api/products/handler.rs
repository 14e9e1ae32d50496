//! Product API Handlers

use axum::extract::State;
use shared::models::Product;

use crate::AppResult;
use crate::core::ServerState;
use crate::services::catalog;
use crate::utils::extract::{Json, Path};

/// GET /api/productos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(catalog::list_products(state.pool()).await?))
}

/// GET /api/productos/{categoria_id} - 404 when the category has no products
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(catalog::list_products_by_category(state.pool(), category_id).await?))
}
