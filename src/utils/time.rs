//! Time utilities: DB timestamp formatting, current-time sampling and
//! duration rendering.

use chrono::{Local, NaiveDateTime, Timelike};

/// Timestamp format used in every TEXT column holding a date-time.
pub const DB_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds, so values survive a
/// round-trip through the DB text format unchanged.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn to_db(ts: NaiveDateTime) -> String {
    ts.format(DB_DATETIME_FMT).to_string()
}

pub fn parse_db(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_DATETIME_FMT).ok()
}

/// Format seconds as "HH:MM:SS" (negative values keep a leading sign).
pub fn format_secs(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
