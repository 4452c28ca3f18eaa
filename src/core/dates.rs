//! Date formatting helpers shared by the API and the rendered pages.
//!
//! Nothing in here reads the clock. Callers pass in "today" so the
//! output for a given input never changes.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};

/// Number of days after which a trade is no longer considered recent.
pub const DEFAULT_RECENT_TRADE_DAYS: i64 = 30;

/// Short form, e.g. "Jan 5, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long form, e.g. "January 5, 2024".
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Date and 12-hour clock time, e.g. "Jan 5, 2024, 3:04 PM".
pub fn format_date_time(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Whole days from `from` to `to`. Negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Human friendly distance between `date` and `today`, e.g. "3 days
/// ago" or "in 2 days".
pub fn format_relative(date: NaiveDate, today: NaiveDate) -> String {
    let days = days_between(date, today);
    match days {
        d if d < -1 => format!("in {} days", -d),
        -1 => "tomorrow".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 7 => plural(d, "day"),
        d if d < 30 => plural(d / 7, "week"),
        d if d < 365 => plural(d / 30, "month"),
        d => plural(d / 365, "year"),
    }
}

/// A trade is recent when it happened no more than `threshold_days`
/// before `today`. The boundary day itself counts as recent. Dates
/// after `today` are treated as recent too.
pub fn is_recent_trade(trade_date: NaiveDate, today: NaiveDate, threshold_days: i64) -> bool {
    days_between(trade_date, today) <= threshold_days
}

/// Parse either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp
/// (normalized to its UTC calendar date).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|e| anyhow!("Invalid date '{}': {}", value, e))
}
