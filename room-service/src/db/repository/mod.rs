//! Repository Module
//!
//! Explicit query functions per table. Each function states which related
//! rows it loads; nothing is fetched lazily.

pub mod admin_user;
pub mod category;
pub mod order;
pub mod product;
pub mod room;

use shared::error::ErrorCode;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return RepoError::Validation(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    use crate::db::DbService;

    /// Migrated in-memory pool
    pub async fn pool() -> SqlitePool {
        DbService::in_memory()
            .await
            .expect("in-memory database")
            .pool
    }

    /// Room, category and product with ids 1, 1, 1
    pub async fn seeded_pool() -> SqlitePool {
        let pool = pool().await;
        sqlx::query("INSERT INTO room (number, surname) VALUES ('101', 'Gomez'), ('102', 'Perez')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO category (name, sort_order) VALUES ('Bebidas', 1)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO product (name, price, category_id) VALUES ('Coca Cola', 2.5, 1), ('Agua', 1.2, 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }
}
