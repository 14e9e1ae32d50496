//! Category API Handlers

use axum::extract::State;
use shared::models::{CategoryWithProducts, Product};

use crate::AppResult;
use crate::core::ServerState;
use crate::services::catalog;
use crate::utils::extract::{Json, Path};

/// GET /api/categorias - categories with their products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CategoryWithProducts>>> {
    Ok(Json(catalog::list_categories(state.pool()).await?))
}

/// GET /api/categorias/{id}/productos
pub async fn list_products(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(catalog::list_category_products(state.pool(), id).await?))
}
