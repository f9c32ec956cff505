//! Reporting Models
//!
//! Read-only aggregation rows. All of these tolerate zero source rows by
//! simply coming back as empty vectors.

use serde::{Deserialize, Serialize};

/// One row of `GET /api/revenue` (per-day payment rollup)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DailyRevenue {
    /// Calendar date, `YYYY-MM-DD` in the shop time zone
    pub date: String,
    pub daily_revenue: i64,
    pub transaction_count: i64,
}

/// Shift total per calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MonthTotal {
    pub year: i64,
    pub month: i64,
    pub total: i64,
}

/// Shift total per calendar quarter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct QuarterTotal {
    pub year: i64,
    pub quarter: i64,
    pub total: i64,
}

/// Shift total per calendar year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct YearTotal {
    pub year: i64,
    pub total: i64,
}

/// Response of `GET /api/shifts/summary`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    pub by_month: Vec<MonthTotal>,
    pub by_quarter: Vec<QuarterTotal>,
    pub by_year: Vec<YearTotal>,
}
