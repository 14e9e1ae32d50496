//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, price, is_available, image, category_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let sql = format!("SELECT {COLUMNS} FROM product ORDER BY id");
    let products = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("SELECT {COLUMNS} FROM product WHERE id = ?");
    let product = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(product)
}

pub async fn find_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<Product>> {
    let sql = format!("SELECT {COLUMNS} FROM product WHERE category_id = ? ORDER BY id");
    let products = sqlx::query_as::<_, Product>(&sql)
        .bind(category_id)
        .fetch_all(pool)
        .await?;
    Ok(products)
}

pub async fn create(pool: &SqlitePool, data: &ProductCreate) -> RepoResult<Product> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO product (name, description, price, is_available, image, category_id) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.is_available)
    .bind(&data.image)
    .bind(data.category_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

/// Partial update; `None` fields keep their stored value
pub async fn update(pool: &SqlitePool, id: i64, data: &ProductUpdate) -> RepoResult<Product> {
    let rows = sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), description = COALESCE(?2, description), price = COALESCE(?3, price), is_available = COALESCE(?4, is_available), image = COALESCE(?5, image), category_id = COALESCE(?6, category_id) WHERE id = ?7",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.is_available)
    .bind(&data.image)
    .bind(data.category_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}
