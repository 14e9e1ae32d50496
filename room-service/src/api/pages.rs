//! HTML pages and static assets
//!
//! | Path | File | Guard |
//! |------|------|-------|
//! | / | index.html | none |
//! | /productos | productos.html | `access_token` cookie |
//! | /carrito | carrito.html | `access_token` cookie |
//! | /admin | admin/index.html | `admin_token` cookie |
//! | /static/* | STATIC_DIR | none |
//!
//! Guards only check that the cookie is present; the page's own API calls
//! do the real verification.

use axum::{Router, middleware};
use tower_http::services::{ServeDir, ServeFile};

use crate::auth::{require_admin_cookie, require_room_cookie};
use crate::core::{Config, ServerState};

pub fn router(config: &Config) -> Router<ServerState> {
    let templates = &config.templates_dir;

    let guest = Router::new()
        .route_service("/productos", ServeFile::new(templates.join("productos.html")))
        .route_service("/carrito", ServeFile::new(templates.join("carrito.html")))
        .route_layer(middleware::from_fn(require_room_cookie));

    let admin = Router::new()
        .route_service("/admin", ServeFile::new(templates.join("admin").join("index.html")))
        .route_layer(middleware::from_fn(require_admin_cookie));

    Router::new()
        .route_service("/", ServeFile::new(templates.join("index.html")))
        .merge(guest)
        .merge(admin)
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
