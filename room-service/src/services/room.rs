//! Room sessions and room administration

use std::collections::HashMap;

use shared::models::{AdminUser, OrderSummary, Room, RoomCreate, RoomWithOrders};
use sqlx::SqlitePool;

use crate::auth::password::verify_password;
use crate::db::repository::{RepoError, admin_user as admin_repo, order as order_repo, room as room_repo};
use crate::security_log;
use crate::utils::validation::{
    MAX_SURNAME_LEN, check_range, validate_phone, validate_required_text, validate_room_number,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Room login: exact number, case-insensitive surname
pub async fn authenticate_room(pool: &SqlitePool, number: &str, surname: &str) -> AppResult<Room> {
    match room_repo::find_by_credentials(pool, number.trim(), surname).await? {
        Some(room) => Ok(room),
        None => {
            security_log!("WARN", "room_login_failed", number = number.to_string());
            Err(AppError::invalid_credentials(
                "Número de habitación o apellido incorrectos",
            ))
        }
    }
}

/// Admin login: exact username, verified password, active account
pub async fn authenticate_admin(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> AppResult<AdminUser> {
    let user = admin_repo::find_by_username(pool, username).await?;
    match user {
        Some(user) if user.is_active && verify_password(password, &user.password_hash) => Ok(user),
        Some(user) if !user.is_active => {
            security_log!("WARN", "admin_login_inactive", username = username.to_string());
            Err(AppError::invalid_credentials("Usuario o contraseña incorrectos"))
        }
        _ => {
            security_log!("WARN", "admin_login_failed", username = username.to_string());
            Err(AppError::invalid_credentials("Usuario o contraseña incorrectos"))
        }
    }
}

/// Every room with its order summaries (newest first)
pub async fn list_rooms_with_orders(pool: &SqlitePool) -> AppResult<Vec<RoomWithOrders>> {
    let rooms = room_repo::find_all(pool).await?;
    let summaries = order_repo::list_summaries(pool).await?;

    let mut by_room: HashMap<i64, Vec<OrderSummary>> = HashMap::new();
    for summary in summaries {
        by_room.entry(summary.room_id).or_default().push(summary);
    }

    Ok(rooms
        .into_iter()
        .map(|room| RoomWithOrders {
            orders: by_room.remove(&room.id).unwrap_or_default(),
            room,
        })
        .collect())
}

pub async fn create_room(pool: &SqlitePool, mut data: RoomCreate) -> AppResult<Room> {
    data.number = data.number.trim().to_string();
    data.surname = data.surname.trim().to_string();

    validate_room_number(&data.number)?;
    validate_required_text(&data.surname, "apellido", MAX_SURNAME_LEN)?;
    validate_phone(&data.phone)?;
    check_range(data.check_in, data.check_out)?;

    let room = room_repo::create(pool, data).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::RoomNumberExists),
        other => other.into(),
    })?;

    tracing::info!(room_id = room.id, number = %room.number, "Room created");
    Ok(room)
}
