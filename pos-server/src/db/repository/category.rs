//! Category Repository
//!
//! Deleting a category detaches its products (category set to NULL)
//! instead of deleting them.

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate, CategorySortEntry, CategoryUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, order_index FROM categories ORDER BY order_index ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, name, order_index FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(category)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("Category name is required".into()));
    }

    // New categories default to the end of the ordering
    let order_index = match data.order_index {
        Some(idx) => idx,
        None => {
            let max: Option<i64> =
                sqlx::query_scalar("SELECT MAX(order_index) FROM categories")
                    .fetch_one(pool)
                    .await?;
            max.unwrap_or(-1) + 1
        }
    };

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO categories (name, order_index) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(order_index)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    let old_name = existing.name.clone();
    let name = data.name.unwrap_or(existing.name);
    let order_index = data.order_index.unwrap_or(existing.order_index);

    // Renaming a category follows through to its products, which reference
    // the category by name.
    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE categories SET name = ?, order_index = ? WHERE id = ?")
        .bind(&name)
        .bind(order_index)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE products SET category = ? WHERE category = ?")
        .bind(&name)
        .bind(&old_name)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update category".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let existing = find_by_id(pool, id).await?;
    let Some(category) = existing else {
        return Ok(false);
    };

    // Detach products, then drop the category — one transaction so a
    // product is never left pointing at a deleted category.
    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE products SET category = NULL WHERE category = ?")
        .bind(&category.name)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(true)
}

/// Batch reorder: rewrite order_index for every listed category
pub async fn update_sort_order(pool: &SqlitePool, entries: &[CategorySortEntry]) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    for entry in entries {
        sqlx::query("UPDATE categories SET order_index = ? WHERE id = ?")
            .bind(entry.order_index)
            .bind(entry.id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[tokio::test]
    async fn delete_detaches_products_instead_of_deleting_them() {
        let pool = connect_in_memory().await.unwrap();
        let cat = create(
            &pool,
            CategoryCreate {
                name: "Mỳ Cay".into(),
                order_index: None,
            },
        )
        .await
        .unwrap();

        sqlx::query("INSERT INTO products (name, price, category) VALUES ('Mỳ Cay Bò', 30000, 'Mỳ Cay')")
            .execute(&pool)
            .await
            .unwrap();

        assert!(delete(&pool, cat.id).await.unwrap());

        let category: Option<String> =
            sqlx::query_scalar("SELECT category FROM products WHERE name = 'Mỳ Cay Bò'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(category, None);
    }

    #[tokio::test]
    async fn new_categories_append_to_the_ordering() {
        let pool = connect_in_memory().await.unwrap();
        let a = create(&pool, CategoryCreate { name: "Đồ uống".into(), order_index: None })
            .await
            .unwrap();
        let b = create(&pool, CategoryCreate { name: "Đồ ăn".into(), order_index: None })
            .await
            .unwrap();
        assert!(b.order_index > a.order_index);

        let duplicate = create(&pool, CategoryCreate { name: "Đồ ăn".into(), order_index: None }).await;
        assert!(matches!(duplicate, Err(RepoError::Duplicate(_))));
    }
}
