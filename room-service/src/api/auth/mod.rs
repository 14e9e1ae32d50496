//! Session API
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/auth/login | POST | JSON `{numero, apellido}`, sets `access_token` |
//! | /api/auth/logout | POST | clears `access_token` |
//! | /api/auth/admin/login | POST | form `{username, password}`, sets `admin_token` |
//! | /api/auth/admin/logout | POST | clears `admin_token` |
//! | /api/auth/check | GET | room session probe, never fails |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/admin/login", post(handler::admin_login))
        .route("/admin/logout", post(handler::admin_logout))
        .route("/check", get(handler::check))
}
