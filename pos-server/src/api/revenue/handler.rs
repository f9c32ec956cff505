//! Revenue report handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::payment;
use crate::utils::AppResult;
use crate::utils::time;
use shared::models::DailyRevenue;

/// GET /api/revenue - per-day revenue, newest first
///
/// Days follow the shop wall clock, so a payment at 23:30 UTC lands on the
/// next Vietnamese day.
pub async fn daily(State(state): State<ServerState>) -> AppResult<Json<Vec<DailyRevenue>>> {
    let offset = time::utc_offset_seconds(state.config.timezone);
    let rows = payment::daily_revenue(&state.pool, offset).await?;
    Ok(Json(rows))
}
