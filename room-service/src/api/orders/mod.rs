//! Room order API
//!
//! Every route needs a room session ([`crate::CurrentRoom`]).
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/pedidos/ | POST | 201 with the created order |
//! | /api/pedidos/pendientes | GET | pending orders of the room |
//! | /api/pedidos/pendientes/total | GET | `{pedidos, total}` |
//! | /api/pedidos/confirmar | POST | pending → in_process |
//! | /api/pedidos/{id} | PUT / DELETE | own pending order |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pedidos", post(handler::create))
        .route("/api/pedidos/", post(handler::create))
        .route("/api/pedidos/pendientes", get(handler::list_pending))
        .route("/api/pedidos/pendientes/total", get(handler::pending_total))
        .route("/api/pedidos/confirmar", post(handler::confirm))
        .route("/api/pedidos/{id}", put(handler::update).delete(handler::delete))
}
