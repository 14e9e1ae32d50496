//! Admin User Repository

use super::{RepoError, RepoResult};
use shared::models::AdminUser;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, email, display_name, password_hash, is_active, is_superadmin";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminUser>> {
    let sql = format!("SELECT {COLUMNS} FROM admin_user WHERE id = ?");
    let user = sqlx::query_as::<_, AdminUser>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let sql = format!("SELECT {COLUMNS} FROM admin_user WHERE username = ? LIMIT 1");
    let user = sqlx::query_as::<_, AdminUser>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a new admin; `password_hash` must already be hashed
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    display_name: Option<&str>,
    password_hash: &str,
    is_superadmin: bool,
) -> RepoResult<AdminUser> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO admin_user (username, email, display_name, password_hash, is_superadmin) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(display_name)
    .bind(password_hash)
    .bind(is_superadmin)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin user".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_support::pool().await;
        let user = create(&pool, "admin", "admin@hotel.local", None, "hash", true)
            .await
            .unwrap();
        assert!(user.is_active);
        assert!(user.is_superadmin);

        let reloaded = find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert_eq!(reloaded.id, user.id);
        assert_eq!(find_by_id(&pool, user.id).await.unwrap().unwrap().username, "admin");
        assert!(find_by_username(&pool, "Admin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_email_is_unique() {
        let pool = test_support::pool().await;
        create(&pool, "uno", "same@hotel.local", None, "h", false)
            .await
            .unwrap();
        let err = create(&pool, "dos", "same@hotel.local", None, "h", false)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
