//! HTTP API
//!
//! - [`health`] - liveness probe
//! - [`auth`] - room and admin sessions
//! - [`categories`] / [`products`] - public catalog
//! - [`orders`] - room orders
//! - [`admin`] - admin operations (blanket admin guard)
//! - [`pages`] - HTML pages and static files

pub mod admin;
pub mod auth;
pub mod categories;
pub mod health;
pub mod orders;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, Uri, header},
    middleware,
    response::{IntoResponse, Redirect, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::{AppError, ErrorCode};

/// HTTP request log line per request
async fn log_request(request: Request, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Unmatched paths: JSON 404 under `/api`, landing page otherwise
async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        return AppError::new(ErrorCode::NotFound).into_response();
    }
    Redirect::to("/").into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// Build the Axum router (without state)
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(admin::router(state.clone()))
        .merge(pages::router(&state.config))
        .fallback(fallback)
}

/// Full application: routes, state and tower layers
pub fn build_router(state: ServerState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    build_app(&state)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
