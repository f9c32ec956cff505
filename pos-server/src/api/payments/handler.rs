//! Payment API Handlers
//!
//! `POST /api/payments` is the checkout finalization boundary. The body is
//! validated and normalized here (method aliases, legacy field name,
//! server-assigned timestamp) so the repository only ever sees canonical
//! data. Rows are append-only; there is no update or delete surface.

use axum::{
    Json,
    extract::State,
};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::repository::payment::{self, NewPayment};
use crate::utils::{AppError, AppResult};
use shared::models::{Payment, PaymentCreate, PaymentMethod};

/// Normalize and validate a create payload
///
/// Rejections happen before any persistence attempt:
/// - empty `orders`
/// - missing `total`
/// - method missing under both accepted field names
/// - method that does not normalize to cash/bank (unknown methods would
///   silently fall out of the shift cash/bank split, so they are refused
///   outright here)
pub(super) fn normalize(body: PaymentCreate) -> Result<NewPayment, AppError> {
    if body.orders.is_empty() {
        return Err(AppError::validation("Payment needs at least one line item"));
    }
    let total = body
        .total
        .ok_or_else(|| AppError::validation("Payment total is required"))?;
    if total < 0 {
        return Err(AppError::validation(format!(
            "Payment total must be non-negative, got {total}"
        )));
    }
    let raw = body
        .raw_method()
        .ok_or_else(|| AppError::validation("Payment method is required"))?;
    let method = PaymentMethod::parse_alias(raw)
        .ok_or_else(|| AppError::validation(format!("Unknown payment method: {raw}")))?;

    let time = body.time.unwrap_or_else(shared::util::now_millis);

    Ok(NewPayment {
        order_type: body.order_type,
        order_id: body.order_id,
        orders: body.orders,
        total,
        method,
        time,
    })
}

/// POST /api/payments - record one finalized checkout
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<PaymentCreate>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let data = normalize(body)?;
    let stored = payment::create(&state.pool, data).await?;

    tracing::info!(
        payment_id = stored.id,
        order_id = %stored.order_id,
        total = stored.total,
        method = %stored.method,
        "Payment recorded"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/payments - payment history, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Payment>>> {
    let payments = payment::find_all(&state.pool).await?;
    Ok(Json(payments))
}
