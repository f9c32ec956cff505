//! Shift closing
//!
//! [`close_shift`] rolls one calendar day of payments into a single
//! immutable shift row. The manual endpoint and the daily scheduler both
//! come through here; the only difference is how an "already closed" day
//! is reported (error vs. silent no-op).

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use tokio_util::sync::CancellationToken;

use crate::core::ServerState;
use crate::db::repository::{payment, shift, RepoError};
use crate::utils::time;
use crate::utils::{AppError, AppResult};
use shared::models::ShiftClose;

/// Close the shift for a calendar date (shop-local)
///
/// Sums the day's payments into cash/bank subtotals and writes one shift
/// row. Fails with a conflict when the date is already closed — checked
/// up front for the friendly message, and again by the unique index when
/// two closers race.
pub async fn close_shift(state: &ServerState, date: NaiveDate) -> AppResult<ShiftClose> {
    let tz = state.config.timezone;
    let date_key = date.format("%Y-%m-%d").to_string();

    if shift::find_by_date(&state.pool, &date_key).await?.is_some() {
        return Err(AppError::conflict(format!("Shift already closed for {date_key}")));
    }

    let start = time::day_start_millis(date, tz);
    let end = time::day_end_millis(date, tz);
    let (total, cash, bank) = payment::sum_for_range(&state.pool, start, end).await?;

    let closed_at = shared::util::now_millis();
    let stored = shift::create(&state.pool, &date_key, total, cash, bank, closed_at)
        .await
        .map_err(|e| match e {
            // Lost the race against a concurrent close
            RepoError::Duplicate(_) => {
                AppError::conflict(format!("Shift already closed for {date_key}"))
            }
            other => other.into(),
        })?;

    tracing::info!(
        date = %stored.shift_date,
        total,
        cash,
        bank,
        "Shift closed"
    );

    Ok(ShiftClose {
        success: true,
        date: stored.shift_date,
        total: stored.total,
        cash: stored.cash,
        bank: stored.bank,
    })
}

/// Daily shift auto-close scheduler
///
/// Fires once per day at `config.shift_auto_close` (shop-local). A day
/// that was already closed manually is a silent no-op, not an error.
pub struct ShiftAutoCloseScheduler {
    state: ServerState,
    shutdown: CancellationToken,
}

impl ShiftAutoCloseScheduler {
    pub fn new(state: ServerState, shutdown: CancellationToken) -> Self {
        Self { state, shutdown }
    }

    pub async fn run(self) {
        let close_time = self.state.config.shift_auto_close;
        let tz = self.state.config.timezone;
        tracing::info!(
            "Shift auto-close scheduler started (daily at {})",
            close_time.format("%H:%M")
        );

        loop {
            let sleep_duration = Self::duration_until_next_fire(close_time, tz);
            tracing::debug!(
                "Next automatic shift close in {} minutes",
                sleep_duration.as_secs() / 60
            );

            tokio::select! {
                _ = tokio::time::sleep(sleep_duration) => {
                    self.close_today().await;
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Shift auto-close scheduler received shutdown signal");
                    return;
                }
            }
        }
    }

    async fn close_today(&self) {
        let today = time::local_today(self.state.config.timezone);
        match close_shift(&self.state, today).await {
            Ok(result) => {
                tracing::info!(date = %result.date, total = result.total, "Automatic shift close");
            }
            Err(e) if e.is_conflict() => {
                tracing::debug!(date = %today, "Shift already closed, skipping automatic close");
            }
            Err(e) => {
                tracing::error!("Automatic shift close failed: {}", e);
            }
        }
    }

    /// Duration until the next occurrence of `close_time` in the shop zone
    fn duration_until_next_fire(close_time: NaiveTime, tz: Tz) -> std::time::Duration {
        let now = chrono::Utc::now().with_timezone(&tz);
        let today = now.date_naive();

        let target_date = if now.time() >= close_time {
            today + chrono::Duration::days(1)
        } else {
            today
        };

        let target_datetime = target_date
            .and_time(close_time)
            .and_local_timezone(tz)
            .latest()
            .unwrap_or_else(|| {
                // DST edge case: fall back to one hour from now
                tracing::error!("Cannot resolve local time for shift close, using fallback");
                now + chrono::Duration::hours(1)
            });

        let duration = target_datetime.signed_duration_since(now);
        if duration.num_seconds() <= 0 {
            std::time::Duration::from_secs(60)
        } else {
            duration
                .to_std()
                .unwrap_or(std::time::Duration::from_secs(60))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::payment::NewPayment;
    use shared::models::{OrderType, PaymentMethod};
    use shared::order::LineItem;

    async fn seed_payment(state: &ServerState, method: PaymentMethod, total: i64, at: i64) {
        payment::create(
            &state.pool,
            NewPayment {
                order_type: OrderType::Takeaway,
                order_id: "Đơn mang về 1".into(),
                orders: vec![LineItem {
                    name: "Mỳ Cay Bò".into(),
                    price: total,
                    quantity: 1,
                    note: None,
                    size: None,
                }],
                total,
                method,
                time: at,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn close_twice_conflicts_and_keeps_one_row() {
        let state = ServerState::for_testing().await.unwrap();
        let tz = state.config.timezone;
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let noon = time::date_hms_to_millis(date, 12, 0, 0, tz);

        seed_payment(&state, PaymentMethod::Cash, 50000, noon).await;
        seed_payment(&state, PaymentMethod::Bank, 96000, noon + 1000).await;
        // previous day, must not count
        seed_payment(&state, PaymentMethod::Cash, 70000, noon - 24 * 3600 * 1000).await;

        let first = close_shift(&state, date).await.unwrap();
        assert_eq!(first.date, "2024-03-15");
        assert_eq!(first.total, 146000);
        assert_eq!(first.cash, 50000);
        assert_eq!(first.bank, 96000);
        assert_eq!(first.cash + first.bank, first.total);

        let second = close_shift(&state, date).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        let rows = shift::find_all(&state.pool).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn closing_a_day_without_payments_writes_zeroes() {
        let state = ServerState::for_testing().await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let result = close_shift(&state, date).await.unwrap();
        assert_eq!((result.total, result.cash, result.bank), (0, 0, 0));
    }

    #[test]
    fn next_fire_is_within_a_day() {
        let close_time = NaiveTime::from_hms_opt(0, 1, 0).unwrap();
        let d = ShiftAutoCloseScheduler::duration_until_next_fire(
            close_time,
            chrono_tz::Asia::Ho_Chi_Minh,
        );
        assert!(d.as_secs() > 0);
        assert!(d.as_secs() <= 24 * 3600);
    }
}
