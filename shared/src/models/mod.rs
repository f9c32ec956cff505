//! Data models
//!
//! Shared between pos-server and pos-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); all money amounts are
//! `i64` VND (the đồng has no fractional unit in this shop).

pub mod category;
pub mod payment;
pub mod product;
pub mod report;
pub mod shift;

// Re-exports
pub use category::*;
pub use payment::*;
pub use product::*;
pub use report::*;
pub use shift::*;
