//! Shared types for the quán POS system
//!
//! Domain models used across the server and client crates: catalog
//! entities, payment and shift records, and the client-side cart types.
//! DB row types derive `sqlx::FromRow` behind the `db` feature so the
//! client build stays free of database dependencies.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
