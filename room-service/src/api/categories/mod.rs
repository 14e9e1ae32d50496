//! Category API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categorias", get(handler::list))
        .route("/api/categorias/", get(handler::list))
        .route("/api/categorias/{id}/productos", get(handler::list_products))
}
