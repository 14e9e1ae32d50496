//! Order lifecycle
//!
//! ```text
//! (create) ──▶ pending ──confirm──▶ in_process
//!                 │                     │
//!                 └──── admin ──────────┴──▶ delivered / cancelled / any
//! ```
//!
//! Rooms only touch their own orders. Neither side checks transitions:
//! a room patch and an admin status change both overwrite.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use shared::models::{OrderCreate, OrderStatus, OrderUpdate, OrderView, PendingTotal};
use shared::util::now;
use sqlx::SqlitePool;

use crate::auth::CurrentRoom;
use crate::db::repository::order::{self as order_repo, OrderFilter};
use crate::db::repository::product as product_repo;
use crate::utils::validation::{
    MAX_NOTE_LEN, parse_date_range, validate_optional_text, validate_quantity,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Place a pending order; the product must exist, availability is not checked
pub async fn create_order(
    pool: &SqlitePool,
    room: &CurrentRoom,
    data: OrderCreate,
) -> AppResult<OrderView> {
    validate_quantity(data.quantity)?;
    validate_optional_text(&data.notes, "notas", MAX_NOTE_LEN)?;

    product_repo::find_by_id(pool, data.product_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    let id = order_repo::insert(
        pool,
        room.id,
        data.product_id,
        data.quantity,
        data.notes.as_deref(),
        now(),
    )
    .await?;

    tracing::info!(order_id = id, room = %room.number, product_id = data.product_id, "Order created");

    order_repo::find_detail(pool, id)
        .await?
        .map(OrderView::from)
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
}

pub async fn list_pending(pool: &SqlitePool, room: &CurrentRoom) -> AppResult<Vec<OrderView>> {
    let rows = order_repo::list_for_room_by_status(pool, room.id, OrderStatus::Pending).await?;
    Ok(rows.into_iter().map(OrderView::from).collect())
}

/// Count and total of the room's pending orders, summed as decimals
pub async fn pending_total(pool: &SqlitePool, room: &CurrentRoom) -> AppResult<PendingTotal> {
    let lines = order_repo::pending_lines(pool, room.id).await?;
    Ok(sum_lines(&lines))
}

fn sum_lines(lines: &[(i64, f64)]) -> PendingTotal {
    let total = lines
        .iter()
        .map(|(quantity, price)| {
            Decimal::from_f64(*price).unwrap_or_default() * Decimal::from(*quantity)
        })
        .sum::<Decimal>()
        .round_dp(2);

    PendingTotal {
        orders: lines.len() as i64,
        total: total.to_f64().unwrap_or_default(),
    }
}

/// Room-side edit: present fields overwrite, whatever the current status
pub async fn update_order(
    pool: &SqlitePool,
    room: &CurrentRoom,
    order_id: i64,
    patch: OrderUpdate,
) -> AppResult<OrderView> {
    order_repo::find_for_room(pool, room.id, order_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    if let Some(quantity) = patch.quantity {
        validate_quantity(quantity)?;
    }
    if let Some(notes) = &patch.notes {
        validate_optional_text(notes, "notas", MAX_NOTE_LEN)?;
    }

    if !patch.is_empty() {
        order_repo::update_for_room(
            pool,
            room.id,
            order_id,
            patch.quantity,
            patch.notes.as_ref().map(|n| n.as_deref()),
            patch.status,
        )
        .await?;
    }

    order_repo::find_detail_for_room(pool, room.id, order_id)
        .await?
        .map(OrderView::from)
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
}

pub async fn delete_order(pool: &SqlitePool, room: &CurrentRoom, order_id: i64) -> AppResult<()> {
    if !order_repo::delete_for_room(pool, room.id, order_id).await? {
        return Err(AppError::new(ErrorCode::OrderNotFound));
    }
    tracing::info!(order_id, room = %room.number, "Order deleted");
    Ok(())
}

/// Move every pending order of the room to in_process; returns how many moved
pub async fn confirm_pending(pool: &SqlitePool, room: &CurrentRoom) -> AppResult<u64> {
    let confirmed = order_repo::confirm_pending(pool, room.id).await?;
    if confirmed == 0 {
        return Err(AppError::new(ErrorCode::NoPendingOrders));
    }
    tracing::info!(room = %room.number, confirmed, "Pending orders confirmed");
    Ok(confirmed)
}

/// Admin listing, newest first
pub async fn list_all(
    pool: &SqlitePool,
    status: Option<OrderStatus>,
    from: Option<&str>,
    to: Option<&str>,
) -> AppResult<Vec<OrderView>> {
    let (from, to) = parse_date_range(from, to)?;
    let filter = OrderFilter { status, from, to };
    let rows = order_repo::list_all(pool, &filter).await?;
    Ok(rows.into_iter().map(OrderView::from).collect())
}

/// Admin status overwrite
pub async fn set_order_status(
    pool: &SqlitePool,
    order_id: i64,
    status: OrderStatus,
) -> AppResult<OrderView> {
    let updated = order_repo::set_status(pool, order_id, status, now()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::OrderNotFound));
    }
    tracing::info!(order_id, status = %status, "Order status set");

    order_repo::find_detail(pool, order_id)
        .await?
        .map(OrderView::from)
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;
    use chrono::Utc;

    fn room(id: i64, number: &str, surname: &str) -> CurrentRoom {
        CurrentRoom {
            id,
            number: number.into(),
            surname: surname.into(),
        }
    }

    fn order(product_id: i64, quantity: i64, notes: Option<&str>) -> OrderCreate {
        OrderCreate {
            product_id,
            quantity,
            notes: notes.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_nested_view() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");

        let view = create_order(&pool, &gomez, order(1, 2, Some("sin hielo")))
            .await
            .unwrap();
        assert_eq!(view.status, OrderStatus::Pending);
        assert_eq!(view.quantity, 2);
        assert_eq!(view.notes.as_deref(), Some("sin hielo"));
        assert!(view.delivered_at.is_none());
        assert_eq!(view.product.name, "Coca Cola");
        assert_eq!(view.room.number, "101");
    }

    #[tokio::test]
    async fn test_create_order_rejects_bad_input() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");

        let err = create_order(&pool, &gomez, order(1, 0, None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let long = "n".repeat(MAX_NOTE_LEN + 1);
        let err = create_order(&pool, &gomez, order(1, 1, Some(&long)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = create_order(&pool, &gomez, order(99, 1, None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn test_create_order_accepts_unavailable_product() {
        let pool = test_support::seeded_pool().await;
        sqlx::query("UPDATE product SET is_available = 0 WHERE id = 2")
            .execute(&pool)
            .await
            .unwrap();

        let view = create_order(&pool, &room(1, "101", "Gomez"), order(2, 1, None))
            .await
            .unwrap();
        assert_eq!(view.status, OrderStatus::Pending);
        assert!(!view.product.is_available);
    }

    #[tokio::test]
    async fn test_pending_total_uses_decimal_sum() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        create_order(&pool, &gomez, order(1, 3, None)).await.unwrap();
        create_order(&pool, &gomez, order(2, 1, None)).await.unwrap();

        let total = pending_total(&pool, &gomez).await.unwrap();
        assert_eq!(total.orders, 2);
        assert_eq!(total.total, 8.7);

        let empty = pending_total(&pool, &room(2, "102", "Perez")).await.unwrap();
        assert_eq!(empty.orders, 0);
        assert_eq!(empty.total, 0.0);
    }

    #[test]
    fn test_sum_lines_rounds_to_cents() {
        let total = sum_lines(&[(3, 0.1), (1, 0.2)]);
        assert_eq!(total.total, 0.5);
        assert_eq!(total.orders, 2);
    }

    #[tokio::test]
    async fn test_foreign_order_is_not_found() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        let perez = room(2, "102", "Perez");
        let view = create_order(&pool, &gomez, order(1, 1, None)).await.unwrap();

        let patch = OrderUpdate {
            quantity: Some(5),
            ..Default::default()
        };
        let err = update_order(&pool, &perez, view.id, patch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        let err = delete_order(&pool, &perez, view.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        let err = delete_order(&pool, &perez, 9999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        // still there for its owner
        assert_eq!(list_pending(&pool, &gomez).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_order_overwrites_present_fields() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        let view = create_order(&pool, &gomez, order(1, 1, None)).await.unwrap();

        let patch = OrderUpdate {
            quantity: Some(4),
            notes: Some(Some("con limón".into())),
            status: None,
        };
        let updated = update_order(&pool, &gomez, view.id, patch).await.unwrap();
        assert_eq!(updated.quantity, 4);
        assert_eq!(updated.notes.as_deref(), Some("con limón"));
        assert_eq!(updated.status, OrderStatus::Pending);
        assert_eq!(updated.created_at, view.created_at);

        // any status, from any status
        let patch = OrderUpdate {
            status: Some(OrderStatus::InProcess),
            ..Default::default()
        };
        let moved = update_order(&pool, &gomez, view.id, patch).await.unwrap();
        assert_eq!(moved.status, OrderStatus::InProcess);
        assert_eq!(moved.quantity, 4);

        let patch = OrderUpdate {
            notes: Some(None),
            ..Default::default()
        };
        let cleared = update_order(&pool, &gomez, view.id, patch).await.unwrap();
        assert!(cleared.notes.is_none());
        assert_eq!(cleared.status, OrderStatus::InProcess);

        let patch = OrderUpdate {
            quantity: Some(0),
            ..Default::default()
        };
        let err = update_order(&pool, &gomez, view.id, patch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_update_after_confirm() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        let view = create_order(&pool, &gomez, order(1, 1, Some("sin hielo")))
            .await
            .unwrap();
        confirm_pending(&pool, &gomez).await.unwrap();

        let patch = OrderUpdate {
            notes: Some(Some("x".into())),
            ..Default::default()
        };
        let updated = update_order(&pool, &gomez, view.id, patch).await.unwrap();
        assert_eq!(updated.notes.as_deref(), Some("x"));
        assert_eq!(updated.status, OrderStatus::InProcess);

        let unchanged = update_order(&pool, &gomez, view.id, OrderUpdate::default())
            .await
            .unwrap();
        assert_eq!(unchanged.notes.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_confirm_pending_twice() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        create_order(&pool, &gomez, order(1, 1, None)).await.unwrap();
        create_order(&pool, &gomez, order(2, 2, None)).await.unwrap();

        assert_eq!(confirm_pending(&pool, &gomez).await.unwrap(), 2);
        let err = confirm_pending(&pool, &gomez).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoPendingOrders);
        assert!(list_pending(&pool, &gomez).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_status_stamps_delivery_once() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        let view = create_order(&pool, &gomez, order(1, 1, None)).await.unwrap();

        let in_process = set_order_status(&pool, view.id, OrderStatus::InProcess)
            .await
            .unwrap();
        assert!(in_process.delivered_at.is_none());

        let delivered = set_order_status(&pool, view.id, OrderStatus::Delivered)
            .await
            .unwrap();
        let stamp = delivered.delivered_at.expect("stamped on delivery");
        assert!((Utc::now() - stamp).num_seconds() < 5);

        let reverted = set_order_status(&pool, view.id, OrderStatus::Pending)
            .await
            .unwrap();
        assert_eq!(reverted.delivered_at, Some(stamp));

        let again = set_order_status(&pool, view.id, OrderStatus::Delivered)
            .await
            .unwrap();
        assert_eq!(again.delivered_at, Some(stamp));

        let err = set_order_status(&pool, 9999, OrderStatus::Delivered)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn test_list_all_filters() {
        let pool = test_support::seeded_pool().await;
        let gomez = room(1, "101", "Gomez");
        let perez = room(2, "102", "Perez");
        let first = create_order(&pool, &gomez, order(1, 1, None)).await.unwrap();
        let second = create_order(&pool, &perez, order(2, 1, None)).await.unwrap();
        set_order_status(&pool, first.id, OrderStatus::Delivered)
            .await
            .unwrap();

        let all = list_all(&pool, None, None, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);

        let delivered = list_all(&pool, Some(OrderStatus::Delivered), None, None)
            .await
            .unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id, first.id);

        let today = Utc::now().format("%Y-%m-%d").to_string();
        let ranged = list_all(&pool, None, Some(&today), Some(&today)).await.unwrap();
        assert_eq!(ranged.len(), 2);

        let err = list_all(&pool, None, Some("ayer"), None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);

        let err = list_all(&pool, None, Some("2024-02-01"), Some("2024-01-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);
    }
}
