//! Room Repository

use super::{RepoError, RepoResult};
use shared::models::{Room, RoomCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, number, surname, phone, check_in, check_out, is_active";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Room>> {
    let sql = format!("SELECT {COLUMNS} FROM room ORDER BY number, id");
    let rooms = sqlx::query_as::<_, Room>(&sql).fetch_all(pool).await?;
    Ok(rooms)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Room>> {
    let sql = format!("SELECT {COLUMNS} FROM room WHERE id = ?");
    let room = sqlx::query_as::<_, Room>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

pub async fn find_by_number(pool: &SqlitePool, number: &str) -> RepoResult<Option<Room>> {
    let sql = format!("SELECT {COLUMNS} FROM room WHERE number = ? LIMIT 1");
    let room = sqlx::query_as::<_, Room>(&sql)
        .bind(number)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

/// Room matching both id and number (token re-validation)
pub async fn find_by_id_and_number(
    pool: &SqlitePool,
    id: i64,
    number: &str,
) -> RepoResult<Option<Room>> {
    let sql = format!("SELECT {COLUMNS} FROM room WHERE id = ? AND number = ?");
    let room = sqlx::query_as::<_, Room>(&sql)
        .bind(id)
        .bind(number)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

/// Exact number, case-insensitive surname
///
/// SQLite `lower()` only folds ASCII, so the surname comparison happens here.
pub async fn find_by_credentials(
    pool: &SqlitePool,
    number: &str,
    surname: &str,
) -> RepoResult<Option<Room>> {
    let wanted = surname.trim().to_lowercase();
    let room = find_by_number(pool, number)
        .await?
        .filter(|room| room.surname.trim().to_lowercase() == wanted);
    Ok(room)
}

pub async fn create(pool: &SqlitePool, data: RoomCreate) -> RepoResult<Room> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO room (number, surname, phone, check_in, check_out) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.number)
    .bind(&data.surname)
    .bind(&data.phone)
    .bind(data.check_in)
    .bind(data.check_out)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Room {} already exists", data.number))
        }
        other => other,
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create room".into()))
}
