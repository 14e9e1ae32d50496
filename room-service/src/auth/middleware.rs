//! Authentication middleware
//!
//! - [`require_admin`]: blanket guard for the `/api/admin` router
//! - [`require_room_cookie`] / [`require_admin_cookie`]: page guards that
//!   redirect to the landing page instead of answering with JSON

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::AppError;
use crate::auth::cookie::{self, ADMIN_COOKIE, ROOM_COOKIE};
use crate::auth::extractor::resolve_admin;
use crate::core::ServerState;

/// Admin guard - every admin route requires a verified, active admin
///
/// On success the [`crate::auth::CurrentAdmin`] is stored in the request
/// extensions, where the extractor picks it up without re-querying.
///
/// | Failure | Status |
/// |---------|--------|
/// | no token | 401 |
/// | expired / invalid token, room token | 401 |
/// | admin missing or inactive | 401 |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let uri = req.uri().path().to_string();
    let admin = resolve_admin(&state, req.headers(), &uri).await?;
    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}

/// Page guard - guest pages need the room cookie, otherwise 303 to `/`
pub async fn require_room_cookie(req: Request, next: Next) -> Response {
    if cookie::get_cookie(req.headers(), ROOM_COOKIE).is_none() {
        return Redirect::to("/").into_response();
    }
    next.run(req).await
}

/// Page guard - the admin page needs the admin cookie, otherwise 303 to `/`
pub async fn require_admin_cookie(req: Request, next: Next) -> Response {
    if cookie::get_cookie(req.headers(), ADMIN_COOKIE).is_none() {
        return Redirect::to("/").into_response();
    }
    next.run(req).await
}
