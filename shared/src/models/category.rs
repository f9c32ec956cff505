//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `order_index` is an explicit sort position maintained by the admin UI;
/// the batch reorder endpoint rewrites all indices in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub order_index: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub order_index: Option<i64>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub order_index: Option<i64>,
}

/// One entry of the batch sort-order update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySortEntry {
    pub id: i64,
    pub order_index: i64,
}
