//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::{AppError, AppResult};
use shared::models::{Category, CategoryCreate, CategorySortEntry, CategoryUpdate};

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let found = category::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let created = category::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let updated = category::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/categories/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = category::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Category {id} not found")));
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// PUT /api/categories/sort-order
pub async fn update_sort_order(
    State(state): State<ServerState>,
    Json(entries): Json<Vec<CategorySortEntry>>,
) -> AppResult<Json<Vec<Category>>> {
    if entries.is_empty() {
        return Err(AppError::validation("Sort order update needs at least one entry"));
    }
    category::update_sort_order(&state.pool, &entries).await?;
    let categories = category::find_all(&state.pool).await?;
    Ok(Json(categories))
}
