//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::Category;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, icon, sort_order FROM category ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, icon, sort_order FROM category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, icon, sort_order FROM category WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    icon: Option<&str>,
    sort_order: i64,
) -> RepoResult<Category> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO category (name, icon, sort_order) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(icon)
    .bind(sort_order)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn test_listing_order_is_sort_order_then_id() {
        let pool = test_support::pool().await;
        create(&pool, "Postres", None, 2).await.unwrap();
        create(&pool, "Bebidas", Some("local_bar"), 1).await.unwrap();
        create(&pool, "Snacks", None, 2).await.unwrap();

        let names: Vec<String> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Bebidas", "Postres", "Snacks"]);
    }

    #[tokio::test]
    async fn test_negative_sort_order_rejected_by_schema() {
        let pool = test_support::pool().await;
        let err = create(&pool, "X", None, -1).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
