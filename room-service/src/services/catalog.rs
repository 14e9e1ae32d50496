//! Catalog: categories and products

use std::collections::HashMap;

use shared::models::{
    Category, CategoryCreate, CategoryWithProducts, Product, ProductCreate, ProductSummary,
    ProductUpdate, ProductWithCategory,
};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, category as category_repo, product as product_repo};
use crate::utils::validation::{
    MAX_CATEGORY_NAME_LEN, MAX_DESCRIPTION_LEN, MAX_ICON_LEN, MAX_IMAGE_LEN,
    MAX_PRODUCT_NAME_LEN, validate_optional_text, validate_price, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Categories in display order, each with its products
///
/// Two queries; products are grouped in memory.
pub async fn list_categories(pool: &SqlitePool) -> AppResult<Vec<CategoryWithProducts>> {
    let categories = category_repo::find_all(pool).await?;
    let products = product_repo::find_all(pool).await?;

    let mut by_category: HashMap<i64, Vec<ProductSummary>> = HashMap::new();
    for product in products {
        by_category
            .entry(product.category_id)
            .or_default()
            .push(product.into());
    }

    Ok(categories
        .into_iter()
        .map(|category| CategoryWithProducts {
            products: by_category.remove(&category.id).unwrap_or_default(),
            category,
        })
        .collect())
}

/// Products of an existing category; an empty category yields an empty list
pub async fn list_category_products(
    pool: &SqlitePool,
    category_id: i64,
) -> AppResult<Vec<Product>> {
    if !category_repo::exists(pool, category_id).await? {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }
    Ok(product_repo::find_by_category(pool, category_id).await?)
}

pub async fn list_products(pool: &SqlitePool) -> AppResult<Vec<Product>> {
    Ok(product_repo::find_all(pool).await?)
}

/// Products by category id; no products (or no category) is a 404
pub async fn list_products_by_category(
    pool: &SqlitePool,
    category_id: i64,
) -> AppResult<Vec<Product>> {
    let products = product_repo::find_by_category(pool, category_id).await?;
    if products.is_empty() {
        return Err(AppError::new(ErrorCode::CategoryEmpty));
    }
    Ok(products)
}

async fn with_category(pool: &SqlitePool, product: Product) -> AppResult<ProductWithCategory> {
    let category = category_repo::find_by_id(pool, product.category_id).await?;
    Ok(ProductWithCategory { product, category })
}

fn missing_category() -> AppError {
    AppError::with_message(
        ErrorCode::CategoryNotFound,
        "La categoría especificada no existe",
    )
}

pub async fn create_product(
    pool: &SqlitePool,
    data: ProductCreate,
) -> AppResult<ProductWithCategory> {
    validate_required_text(&data.name, "nombre", MAX_PRODUCT_NAME_LEN)?;
    validate_optional_text(&data.description, "descripcion", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.image, "imagen", MAX_IMAGE_LEN)?;
    validate_price(data.price)?;

    if !category_repo::exists(pool, data.category_id).await? {
        return Err(missing_category());
    }

    let product = product_repo::create(pool, &data).await.map_err(|e| {
        tracing::error!(error = %e, name = %data.name, "Product insert failed");
        AppError::with_message(
            ErrorCode::ProductCreateFailed,
            format!("Error al crear el producto: {e}"),
        )
    })?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    with_category(pool, product).await
}

pub async fn update_product(
    pool: &SqlitePool,
    id: i64,
    patch: ProductUpdate,
) -> AppResult<ProductWithCategory> {
    if let Some(name) = &patch.name {
        validate_required_text(name, "nombre", MAX_PRODUCT_NAME_LEN)?;
    }
    validate_optional_text(&patch.description, "descripcion", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&patch.image, "imagen", MAX_IMAGE_LEN)?;
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(category_id) = patch.category_id
        && !category_repo::exists(pool, category_id).await?
    {
        return Err(missing_category());
    }

    let product = product_repo::update(pool, id, &patch)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::ProductNotFound),
            other => other.into(),
        })?;

    tracing::info!(product_id = id, "Product updated");
    with_category(pool, product).await
}

pub async fn create_category(pool: &SqlitePool, data: CategoryCreate) -> AppResult<Category> {
    validate_required_text(&data.name, "nombre", MAX_CATEGORY_NAME_LEN)?;
    validate_optional_text(&data.icon, "icono", MAX_ICON_LEN)?;
    let sort_order = data.sort_order.unwrap_or(0);
    if sort_order < 0 {
        return Err(AppError::validation("orden no puede ser negativo"));
    }

    let category = category_repo::create(pool, &data.name, data.icon.as_deref(), sort_order).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");
    Ok(category)
}
