//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`categories`] - category management
//! - [`products`] - product catalog management
//! - [`payments`] - payment recording and history
//! - [`revenue`] - per-day revenue report
//! - [`shifts`] - shift close, history and summary

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod categories;
pub mod health;
pub mod payments;
pub mod products;
pub mod revenue;
pub mod shifts;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(payments::router())
        .merge(revenue::router())
        .merge(shifts::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
