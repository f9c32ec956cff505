//! Shift API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::shift;
use crate::shifts::close_shift;
use crate::utils::AppResult;
use crate::utils::time;
use shared::models::{Shift, ShiftClose, ShiftSummary};

/// POST /api/shifts/close - manual close for today (shop-local date)
pub async fn close(State(state): State<ServerState>) -> AppResult<Json<ShiftClose>> {
    let today = time::local_today(state.config.timezone);
    let result = close_shift(&state, today).await?;
    Ok(Json(result))
}

/// GET /api/shifts - shift history, newest date first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Shift>>> {
    let shifts = shift::find_all(&state.pool).await?;
    Ok(Json(shifts))
}

/// GET /api/shifts/summary - totals by month, quarter and year
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<ShiftSummary>> {
    let by_month = shift::totals_by_month(&state.pool).await?;
    let by_quarter = shift::totals_by_quarter(&state.pool).await?;
    let by_year = shift::totals_by_year(&state.pool).await?;
    Ok(Json(ShiftSummary {
        by_month,
        by_quarter,
        by_year,
    }))
}
