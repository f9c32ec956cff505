use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::utils::time::parse_time_of_day;

/// Server configuration
///
/// All settings can be overridden through environment variables:
///
/// | Variable         | Default            | Meaning |
/// |------------------|--------------------|---------|
/// | HTTP_PORT        | 5000               | HTTP API port |
/// | DATABASE_PATH    | pos.db             | SQLite database file |
/// | TIMEZONE         | Asia/Ho_Chi_Minh   | shop time zone |
/// | SHIFT_AUTO_CLOSE | 00:01              | daily auto-close time (HH:MM, shop-local) |
/// | ENVIRONMENT      | development        | development \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Shop time zone; all calendar-date logic (shift dates, revenue
    /// grouping) follows this zone
    pub timezone: Tz,
    /// Time of day the scheduler runs the automatic shift close
    pub shift_auto_close: NaiveTime,
    /// Running environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset or unparseable
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|v| {
                v.parse::<Tz>()
                    .map_err(|e| tracing::warn!("Invalid TIMEZONE '{}': {}", v, e))
                    .ok()
            })
            .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh);

        let shift_auto_close = std::env::var("SHIFT_AUTO_CLOSE")
            .map(|v| parse_time_of_day(&v))
            .unwrap_or_else(|_| NaiveTime::from_hms_opt(0, 1, 0).unwrap());

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "pos.db".into()),
            timezone,
            shift_auto_close,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
