//! Time helpers — shop time zone conversions
//!
//! All date→timestamp conversions happen at the API handler / scheduler
//! layer; the repository layer only ever receives `i64` Unix millis or a
//! preformatted `YYYY-MM-DD` date string.

use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Today's calendar date in the shop time zone
pub fn local_today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Date + h/m/s → Unix millis in the shop time zone
///
/// If the local time does not exist (DST gap), falls back to UTC.
/// Asia/Ho_Chi_Minh has no DST; this only matters for other zones.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let time = NaiveTime::from_hms_opt(hour, min, sec).unwrap_or(NaiveTime::MIN);
    let naive = date.and_time(time);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of a date (00:00:00) → Unix millis in the shop time zone
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of a date → next day 00:00:00 Unix millis; callers use `< end`
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// Current UTC offset of the shop time zone in seconds
///
/// Used to shift Unix timestamps before SQLite's `date(..., 'unixepoch')`
/// so day grouping follows the shop's wall clock (UTC+7 → 25200).
pub fn utc_offset_seconds(tz: Tz) -> i64 {
    let now = chrono::Utc::now().naive_utc();
    tz.offset_from_utc_datetime(&now).fix().local_minus_utc() as i64
}

/// Parse a HH:MM time-of-day string, falling back to midnight
pub fn parse_time_of_day(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!("Failed to parse time-of-day '{}': {}, falling back to 00:00", value, e);
        NaiveTime::MIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Ho_Chi_Minh;

    #[test]
    fn vietnam_offset_is_seven_hours() {
        assert_eq!(utc_offset_seconds(Ho_Chi_Minh), 7 * 3600);
    }

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let start = day_start_millis(date, Ho_Chi_Minh);
        let end = day_end_millis(date, Ho_Chi_Minh);
        assert_eq!(end - start, 24 * 3600 * 1000);
        // 2024-03-15 00:00 +07:00 == 2024-03-14 17:00 UTC
        assert_eq!(start, 1_710_435_600_000);
    }

    #[test]
    fn bad_time_of_day_falls_back_to_midnight() {
        assert_eq!(parse_time_of_day("25:99"), NaiveTime::MIN);
        assert_eq!(
            parse_time_of_day("00:01"),
            NaiveTime::from_hms_opt(0, 1, 0).unwrap()
        );
    }
}
