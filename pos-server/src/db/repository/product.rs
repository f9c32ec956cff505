//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, price, priceS, priceM, priceL, category, image, description";

pub async fn find_all(pool: &SqlitePool, category: Option<&str>) -> RepoResult<Vec<Product>> {
    let products = match category {
        Some(cat) => {
            sqlx::query_as::<_, Product>(&format!(
                "SELECT {COLUMNS} FROM products WHERE category = ? ORDER BY id ASC"
            ))
            .bind(cat)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Product>(&format!(
                "SELECT {COLUMNS} FROM products ORDER BY id ASC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    validate(&data)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO products (name, price, priceS, priceM, priceL, category, image, description) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.name.trim())
    .bind(data.price)
    .bind(data.price_s)
    .bind(data.price_m)
    .bind(data.price_l)
    .bind(data.category)
    .bind(data.image)
    .bind(data.description)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    validate(&data)?;

    let result = sqlx::query(
        "UPDATE products SET name = ?, price = ?, priceS = ?, priceM = ?, priceL = ?, \
         category = ?, image = ?, description = ? WHERE id = ?",
    )
    .bind(data.name.trim())
    .bind(data.price)
    .bind(data.price_s)
    .bind(data.price_m)
    .bind(data.price_l)
    .bind(data.category)
    .bind(data.image)
    .bind(data.description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update product".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

fn validate(data: &ProductCreate) -> RepoResult<()> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("Product name is required".into()));
    }
    data.validate_pricing().map_err(RepoError::Validation)
}
