//! Shift Repository
//!
//! One row per calendar date. `idx_shifts_date` (UNIQUE) is the guard that
//! holds even when two close attempts race; [`create`] surfaces the
//! violation as `RepoError::Duplicate`.

use super::{RepoError, RepoResult};
use shared::models::{MonthTotal, QuarterTotal, Shift, YearTotal};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, shift_date, total, cash, bank, closed_at";

pub async fn find_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, Shift>(&format!(
        "SELECT {COLUMNS} FROM shifts WHERE shift_date = ?"
    ))
    .bind(date)
    .fetch_optional(pool)
    .await?;
    Ok(shift)
}

/// Insert the shift row for a date; duplicate dates are rejected by the
/// unique index
pub async fn create(
    pool: &SqlitePool,
    date: &str,
    total: i64,
    cash: i64,
    bank: i64,
    closed_at: i64,
) -> RepoResult<Shift> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO shifts (shift_date, total, cash, bank, closed_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(date)
    .bind(total)
    .bind(cash)
    .bind(bank)
    .bind(closed_at)
    .fetch_one(pool)
    .await?;

    let shift = sqlx::query_as::<_, Shift>(&format!("SELECT {COLUMNS} FROM shifts WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    shift.ok_or_else(|| RepoError::Database("Failed to create shift".into()))
}

/// Shift history, newest date first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, Shift>(&format!(
        "SELECT {COLUMNS} FROM shifts ORDER BY shift_date DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(shifts)
}

pub async fn totals_by_month(pool: &SqlitePool) -> RepoResult<Vec<MonthTotal>> {
    let rows = sqlx::query_as::<_, MonthTotal>(
        "SELECT CAST(strftime('%Y', shift_date) AS INTEGER) AS year, \
                CAST(strftime('%m', shift_date) AS INTEGER) AS month, \
                SUM(total) AS total \
         FROM shifts \
         GROUP BY year, month \
         ORDER BY year DESC, month DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn totals_by_quarter(pool: &SqlitePool) -> RepoResult<Vec<QuarterTotal>> {
    let rows = sqlx::query_as::<_, QuarterTotal>(
        "SELECT CAST(strftime('%Y', shift_date) AS INTEGER) AS year, \
                (CAST(strftime('%m', shift_date) AS INTEGER) + 2) / 3 AS quarter, \
                SUM(total) AS total \
         FROM shifts \
         GROUP BY year, quarter \
         ORDER BY year DESC, quarter DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn totals_by_year(pool: &SqlitePool) -> RepoResult<Vec<YearTotal>> {
    let rows = sqlx::query_as::<_, YearTotal>(
        "SELECT CAST(strftime('%Y', shift_date) AS INTEGER) AS year, \
                SUM(total) AS total \
         FROM shifts \
         GROUP BY year \
         ORDER BY year DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
