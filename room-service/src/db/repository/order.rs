//! Order Repository
//!
//! Every room-scoped function takes the room id and filters on it; the
//! detail queries join the product and room in one statement.

use chrono::{DateTime, Utc};
use shared::models::{Order, OrderDetailRow, OrderStatus, OrderSummary};
use sqlx::SqlitePool;

use super::RepoResult;

const DETAIL_SELECT: &str = "SELECT o.id, o.room_id, o.product_id, o.quantity, o.notes, o.status, o.created_at, o.delivered_at, \
     p.name AS product_name, p.price AS product_price, p.image AS product_image, p.is_available AS product_is_available, \
     r.number AS room_number, r.surname AS room_surname, r.phone AS room_phone, r.check_in AS room_check_in, r.check_out AS room_check_out, r.is_active AS room_is_active \
     FROM room_order o \
     JOIN product p ON p.id = o.product_id \
     JOIN room r ON r.id = o.room_id";

const COLUMNS: &str = "id, room_id, product_id, quantity, notes, status, created_at, delivered_at";

/// Admin listing filter; `None` means unbounded
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderDetailRow>> {
    let sql = format!("{DETAIL_SELECT} WHERE o.id = ?");
    let row = sqlx::query_as::<_, OrderDetailRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_detail_for_room(
    pool: &SqlitePool,
    room_id: i64,
    id: i64,
) -> RepoResult<Option<OrderDetailRow>> {
    let sql = format!("{DETAIL_SELECT} WHERE o.id = ? AND o.room_id = ?");
    let row = sqlx::query_as::<_, OrderDetailRow>(&sql)
        .bind(id)
        .bind(room_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_for_room(pool: &SqlitePool, room_id: i64, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("SELECT {COLUMNS} FROM room_order WHERE id = ? AND room_id = ?");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .bind(room_id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

pub async fn list_for_room_by_status(
    pool: &SqlitePool,
    room_id: i64,
    status: OrderStatus,
) -> RepoResult<Vec<OrderDetailRow>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE o.room_id = ? AND o.status = ? ORDER BY o.created_at, o.id"
    );
    let rows = sqlx::query_as::<_, OrderDetailRow>(&sql)
        .bind(room_id)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// All orders, newest first
pub async fn list_all(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<Vec<OrderDetailRow>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE (?1 IS NULL OR o.status = ?1) AND (?2 IS NULL OR o.created_at >= ?2) AND (?3 IS NULL OR o.created_at <= ?3) \
         ORDER BY o.created_at DESC, o.id DESC"
    );
    let rows = sqlx::query_as::<_, OrderDetailRow>(&sql)
        .bind(filter.status)
        .bind(filter.from)
        .bind(filter.to)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Quantity and unit price of each pending line of a room
pub async fn pending_lines(pool: &SqlitePool, room_id: i64) -> RepoResult<Vec<(i64, f64)>> {
    let lines = sqlx::query_as::<_, (i64, f64)>(
        "SELECT o.quantity, p.price FROM room_order o JOIN product p ON p.id = o.product_id WHERE o.room_id = ? AND o.status = 'pending'",
    )
    .bind(room_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

/// Compact rows for the admin room listing, newest first
pub async fn list_summaries(pool: &SqlitePool) -> RepoResult<Vec<OrderSummary>> {
    let rows = sqlx::query_as::<_, OrderSummary>(
        "SELECT o.id, o.room_id, o.product_id, p.name AS product_name, o.quantity, o.status, o.created_at, o.delivered_at \
         FROM room_order o JOIN product p ON p.id = o.product_id \
         ORDER BY o.created_at DESC, o.id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(
    pool: &SqlitePool,
    room_id: i64,
    product_id: i64,
    quantity: i64,
    notes: Option<&str>,
    created_at: DateTime<Utc>,
) -> RepoResult<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO room_order (room_id, product_id, quantity, notes, status, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(room_id)
    .bind(product_id)
    .bind(quantity)
    .bind(notes)
    .bind(OrderStatus::Pending)
    .bind(created_at)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Apply present fields to a room's own order; returns rows affected
/// `notes`: `None` keeps the note, `Some(None)` clears it
pub async fn update_for_room(
    pool: &SqlitePool,
    room_id: i64,
    id: i64,
    quantity: Option<i64>,
    notes: Option<Option<&str>>,
    status: Option<OrderStatus>,
) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE room_order SET quantity = COALESCE(?1, quantity), notes = CASE WHEN ?2 THEN ?3 ELSE notes END, status = COALESCE(?4, status) WHERE id = ?5 AND room_id = ?6",
    )
    .bind(quantity)
    .bind(notes.is_some())
    .bind(notes.flatten())
    .bind(status)
    .bind(id)
    .bind(room_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_room(pool: &SqlitePool, room_id: i64, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM room_order WHERE id = ? AND room_id = ?")
        .bind(id)
        .bind(room_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// pending → in_process for every pending order of the room, in one statement
pub async fn confirm_pending(pool: &SqlitePool, room_id: i64) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE room_order SET status = ? WHERE room_id = ? AND status = ?",
    )
    .bind(OrderStatus::InProcess)
    .bind(room_id)
    .bind(OrderStatus::Pending)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Overwrite the status; the first transition to delivered stamps `delivered_at`
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: OrderStatus,
    now: DateTime<Utc>,
) -> RepoResult<u64> {
    let stamp = (status == OrderStatus::Delivered).then_some(now);
    let result = sqlx::query(
        "UPDATE room_order SET status = ?1, delivered_at = COALESCE(delivered_at, ?2) WHERE id = ?3",
    )
    .bind(status)
    .bind(stamp)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
