//! Payment Repository
//!
//! Append-only. Rows store the line-item snapshot as serialized JSON; the
//! typed [`Payment`] is rebuilt on the way out. Method and order type are
//! already normalized when they reach this layer.

use super::{RepoError, RepoResult};
use shared::models::{DailyRevenue, OrderType, Payment, PaymentMethod};
use shared::order::LineItem;
use sqlx::SqlitePool;

/// Normalized insert data (validation and alias handling happen upstream)
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub order_type: OrderType,
    pub order_id: String,
    pub orders: Vec<LineItem>,
    pub total: i64,
    pub method: PaymentMethod,
    /// Unix millis
    pub time: i64,
}

/// Raw row; `orders` is the JSON snapshot column
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    order_type: String,
    order_id: String,
    orders: String,
    total: i64,
    method: String,
    time: i64,
}

impl PaymentRow {
    fn into_payment(self) -> RepoResult<Payment> {
        let order_type = match self.order_type.as_str() {
            "table" => OrderType::Table,
            "takeaway" => OrderType::Takeaway,
            other => {
                return Err(RepoError::Database(format!(
                    "Unknown order_type in payments row {}: {other}",
                    self.id
                )));
            }
        };
        let method = PaymentMethod::parse_alias(&self.method).ok_or_else(|| {
            RepoError::Database(format!(
                "Unknown method in payments row {}: {}",
                self.id, self.method
            ))
        })?;
        let orders: Vec<LineItem> = serde_json::from_str(&self.orders).map_err(|e| {
            RepoError::Database(format!("Corrupt orders snapshot in payments row {}: {e}", self.id))
        })?;
        Ok(Payment {
            id: self.id,
            order_type,
            order_id: self.order_id,
            orders,
            total: self.total,
            method,
            time: self.time,
        })
    }
}

pub async fn create(pool: &SqlitePool, data: NewPayment) -> RepoResult<Payment> {
    let orders_json = serde_json::to_string(&data.orders)
        .map_err(|e| RepoError::Database(format!("Failed to serialize orders: {e}")))?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO payments (order_type, order_id, orders, total, method, time) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.order_type.to_string())
    .bind(&data.order_id)
    .bind(&orders_json)
    .bind(data.total)
    .bind(data.method.as_str())
    .bind(data.time)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payment".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payment>> {
    let row = sqlx::query_as::<_, PaymentRow>(
        "SELECT id, order_type, order_id, orders, total, method, time FROM payments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(PaymentRow::into_payment).transpose()
}

/// Payment history, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, PaymentRow>(
        "SELECT id, order_type, order_id, orders, total, method, time FROM payments \
         ORDER BY time DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(PaymentRow::into_payment).collect()
}

/// Sums over `[start, end)` millis: (total, cash subtotal, bank subtotal)
///
/// Methods are canonical at write time, so the bucket split is exhaustive
/// and cash + bank always equals total.
pub async fn sum_for_range(
    pool: &SqlitePool,
    start_millis: i64,
    end_millis: i64,
) -> RepoResult<(i64, i64, i64)> {
    let row: (Option<i64>, Option<i64>, Option<i64>) = sqlx::query_as(
        "SELECT SUM(total), \
                SUM(CASE WHEN method = 'cash' THEN total ELSE 0 END), \
                SUM(CASE WHEN method = 'bank' THEN total ELSE 0 END) \
         FROM payments WHERE time >= ? AND time < ?",
    )
    .bind(start_millis)
    .bind(end_millis)
    .fetch_one(pool)
    .await?;

    Ok((row.0.unwrap_or(0), row.1.unwrap_or(0), row.2.unwrap_or(0)))
}

/// Per-day revenue rollup, newest first
///
/// `offset_seconds` shifts the Unix timestamps so `date(..., 'unixepoch')`
/// groups by the shop's wall clock instead of UTC.
pub async fn daily_revenue(
    pool: &SqlitePool,
    offset_seconds: i64,
) -> RepoResult<Vec<DailyRevenue>> {
    let rows = sqlx::query_as::<_, DailyRevenue>(
        "SELECT date(time / 1000 + ?, 'unixepoch') AS date, \
                SUM(total) AS daily_revenue, \
                COUNT(id) AS transaction_count \
         FROM payments \
         GROUP BY date \
         ORDER BY date DESC",
    )
    .bind(offset_seconds)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
