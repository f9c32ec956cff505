//! Shift Model
//!
//! One shift row per calendar date (shop-local). The `shift_date` column
//! carries a UNIQUE index, which is the real close-once guard; the
//! application-level existence check only produces the friendlier error.

use serde::{Deserialize, Serialize};

/// Stored shift record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shift {
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD` in the shop time zone
    pub shift_date: String,
    pub total: i64,
    pub cash: i64,
    pub bank: i64,
    /// Unix millis when the shift was closed
    pub closed_at: i64,
}

/// Response of a successful `POST /api/shifts/close`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftClose {
    pub success: bool,
    pub date: String,
    pub total: i64,
    pub cash: i64,
    pub bank: i64,
}
