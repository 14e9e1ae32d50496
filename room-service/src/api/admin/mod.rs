//! Admin API
//!
//! The whole router sits behind [`crate::auth::require_admin`].
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/admin/habitaciones/ | GET / POST | rooms with order summaries / create room |
//! | /api/admin/pedidos/ | GET | `?estado&desde&hasta`, newest first |
//! | /api/admin/pedidos/{id} | PUT | status via `?estado=` or `{"estado": ..}` |
//! | /api/admin/productos/ | POST | create product |
//! | /api/admin/productos/{id} | PUT | partial update |
//! | /api/admin/categorias/ | POST | create category |
//! | /api/admin/me | GET | current admin profile |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .nest("/api/admin", routes())
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/habitaciones", get(handler::list_rooms).post(handler::create_room))
        .route("/habitaciones/", get(handler::list_rooms).post(handler::create_room))
        .route("/pedidos", get(handler::list_orders))
        .route("/pedidos/", get(handler::list_orders))
        .route("/pedidos/{id}", put(handler::set_order_status))
        .route("/productos", post(handler::create_product))
        .route("/productos/", post(handler::create_product))
        .route("/productos/{id}", put(handler::update_product))
        .route("/categorias", post(handler::create_category))
        .route("/categorias/", post(handler::create_category))
        .route("/me", get(handler::me))
}
