//! Product API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/productos", get(handler::list))
        .route("/api/productos/", get(handler::list))
        .route("/api/productos/{categoria_id}", get(handler::list_by_category))
}
