//! Principal extractors
//!
//! [`CurrentRoom`] and [`CurrentAdmin`] turn a request token into a verified
//! principal. Both re-load the principal from the database, so a token for a
//! renumbered room or a deactivated admin stops working at once.

use axum::{extract::FromRequestParts, http::request::Parts};
use http::HeaderMap;

use crate::AppError;
use crate::auth::cookie::{self, ADMIN_COOKIE, ROOM_COOKIE};
use crate::auth::{JwtError, UserType};
use crate::core::ServerState;
use crate::db::repository::{admin_user, room};
use crate::security_log;
use crate::utils::ErrorCode;

/// Authenticated room session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoom {
    pub id: i64,
    pub number: String,
    pub surname: String,
}

/// Authenticated admin session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAdmin {
    pub id: i64,
    pub username: String,
    pub is_superadmin: bool,
}

fn token_error(err: JwtError, uri: &str) -> AppError {
    security_log!(
        "WARN",
        "auth_failed",
        error = format!("{}", err),
        uri = uri.to_string()
    );
    match err {
        JwtError::ExpiredToken => AppError::token_expired(),
        _ => AppError::invalid_token("Token inválido o expirado"),
    }
}

/// Resolve the room principal from the `access_token` cookie or bearer header
pub async fn resolve_room(
    state: &ServerState,
    headers: &HeaderMap,
    uri: &str,
) -> Result<CurrentRoom, AppError> {
    let Some(token) = cookie::find_token(headers, ROOM_COOKIE) else {
        security_log!("WARN", "auth_missing", uri = uri.to_string());
        return Err(AppError::unauthorized());
    };

    let claims = state
        .get_jwt_service()
        .validate_token(&token)
        .map_err(|e| token_error(e, uri))?;

    let room_id = match (claims.user_type, claims.habitacion_id) {
        (UserType::Room, Some(id)) => id,
        _ => {
            security_log!(
                "WARN",
                "auth_wrong_principal",
                sub = claims.sub.clone(),
                uri = uri.to_string()
            );
            return Err(AppError::invalid_token("Token inválido o expirado"));
        }
    };

    let found = room::find_by_id_and_number(state.pool(), room_id, &claims.sub).await?;
    let Some(found) = found else {
        security_log!(
            "WARN",
            "room_not_found",
            room_id = room_id,
            number = claims.sub.clone()
        );
        return Err(AppError::with_message(
            ErrorCode::NotAuthenticated,
            "Habitación no encontrada",
        ));
    };

    Ok(CurrentRoom {
        id: found.id,
        number: found.number,
        surname: found.surname,
    })
}

/// Resolve the admin principal from the `admin_token` cookie or bearer header
pub async fn resolve_admin(
    state: &ServerState,
    headers: &HeaderMap,
    uri: &str,
) -> Result<CurrentAdmin, AppError> {
    let Some(token) = cookie::find_token(headers, ADMIN_COOKIE) else {
        security_log!("WARN", "admin_auth_missing", uri = uri.to_string());
        return Err(AppError::unauthorized());
    };

    let claims = state
        .get_jwt_service()
        .validate_token(&token)
        .map_err(|e| token_error(e, uri))?;

    if claims.user_type != UserType::Admin || claims.sub.is_empty() {
        security_log!(
            "WARN",
            "admin_required",
            sub = claims.sub.clone(),
            uri = uri.to_string()
        );
        return Err(AppError::with_message(
            ErrorCode::InvalidCredentials,
            "Credenciales inválidas",
        ));
    }

    match admin_user::find_by_username(state.pool(), &claims.sub).await? {
        Some(user) if user.is_active => Ok(CurrentAdmin {
            id: user.id,
            username: user.username,
            is_superadmin: user.is_superadmin,
        }),
        _ => {
            security_log!("WARN", "admin_inactive_or_missing", username = claims.sub.clone());
            Err(AppError::with_message(
                ErrorCode::AccountDisabled,
                "Usuario no encontrado o inactivo",
            ))
        }
    }
}

impl FromRequestParts<ServerState> for CurrentRoom {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(room) = parts.extensions.get::<CurrentRoom>() {
            return Ok(room.clone());
        }

        let uri = parts.uri.path().to_string();
        let room = resolve_room(state, &parts.headers, &uri).await?;
        parts.extensions.insert(room.clone());
        Ok(room)
    }
}

impl FromRequestParts<ServerState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Inserted by the require_admin middleware
        if let Some(admin) = parts.extensions.get::<CurrentAdmin>() {
            return Ok(admin.clone());
        }

        let uri = parts.uri.path().to_string();
        let admin = resolve_admin(state, &parts.headers, &uri).await?;
        parts.extensions.insert(admin.clone());
        Ok(admin)
    }
}
