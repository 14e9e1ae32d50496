//! Session Handlers

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, header::SET_COOKIE};
use serde::Serialize;
use shared::models::{AdminLogin, RoomLogin};

use crate::auth::cookie::{ADMIN_COOKIE, ROOM_COOKIE, clear_cookie, session_cookie};
use crate::auth::{UserType, extractor::resolve_room};
use crate::core::ServerState;
use crate::services::room as room_service;
use crate::utils::extract::{Form, Json};
use crate::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SessionRoom {
    pub id: i64,
    pub numero: String,
}

#[derive(Debug, Serialize)]
pub struct SessionCheck {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitacion: Option<SessionRoom>,
}

fn token_response(
    state: &ServerState,
    cookie_name: &str,
    token: String,
    user_type: UserType,
) -> Response {
    let cookie = session_cookie(
        cookie_name,
        &token,
        state.config.cookie_max_age_seconds,
        state.config.cookie_secure,
    );
    let body = TokenResponse {
        access_token: token,
        token_type: "bearer",
        user_type: user_type.as_str(),
    };
    ([(SET_COOKIE, cookie)], Json(body)).into_response()
}

/// POST /api/auth/login - room login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<RoomLogin>,
) -> AppResult<Response> {
    let room = room_service::authenticate_room(state.pool(), &req.number, &req.surname).await?;

    let token = state
        .get_jwt_service()
        .generate_room_token(room.id, &room.number)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(room_id = room.id, number = %room.number, "Room logged in");
    Ok(token_response(&state, ROOM_COOKIE, token, UserType::Room))
}

/// POST /api/auth/admin/login - admin login (form encoded)
pub async fn admin_login(
    State(state): State<ServerState>,
    Form(req): Form<AdminLogin>,
) -> AppResult<Response> {
    let user = room_service::authenticate_admin(state.pool(), &req.username, &req.password).await?;

    let token = state
        .get_jwt_service()
        .generate_admin_token(&user.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(admin_id = user.id, username = %user.username, "Admin logged in");
    Ok(token_response(&state, ADMIN_COOKIE, token, UserType::Admin))
}

fn logout_response(state: &ServerState, cookie_name: &str, message: &'static str) -> Response {
    let cookie = clear_cookie(cookie_name, state.config.cookie_secure);
    ([(SET_COOKIE, cookie)], Json(MessageResponse { message })).into_response()
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ServerState>) -> Response {
    logout_response(&state, ROOM_COOKIE, "Sesión cerrada")
}

/// POST /api/auth/admin/logout
pub async fn admin_logout(State(state): State<ServerState>) -> Response {
    logout_response(&state, ADMIN_COOKIE, "Sesión de administrador cerrada")
}

/// GET /api/auth/check
pub async fn check(State(state): State<ServerState>, headers: HeaderMap) -> Json<SessionCheck> {
    let check = match resolve_room(&state, &headers, "/api/auth/check").await {
        Ok(room) => SessionCheck {
            authenticated: true,
            habitacion: Some(SessionRoom {
                id: room.id,
                numero: room.number,
            }),
        },
        Err(_) => SessionCheck {
            authenticated: false,
            habitacion: None,
        },
    };
    Json(check)
}
