//! Gap scanner: calendar days in a range with no recorded session for a
//! user. The day set is computed on the fly, one store query per day,
//! with manual pagination over the collected result.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::page::Page;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Scan the inclusive range [from, to], one day at a time, and collect
/// every day on which the user created no session. Each day is
/// normalized to its 00:00:00-23:59:59 window. The page total is the
/// full gap-day count (unlike the anomaly lookup, the total here does
/// reflect the filtered population).
pub fn find_days_with_no_sessions(
    conn: &Connection,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    page: usize,
    size: usize,
) -> AppResult<Page<NaiveDate>> {
    if from > to {
        return Err(AppError::InvalidDate(format!(
            "range start {} is after range end {}",
            from, to
        )));
    }

    let mut gap_days: Vec<NaiveDate> = Vec::new();

    let mut day = from;
    loop {
        let window_start = day.and_hms_opt(0, 0, 0).unwrap_or_default();
        let window_end = day.and_hms_opt(23, 59, 59).unwrap_or_default();

        let sessions = queries::count_sessions_created_between(
            conn,
            user_id,
            window_start,
            window_end,
        )?;
        if sessions == 0 {
            gap_days.push(day);
        }

        if day >= to {
            break;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let content = page_content(&gap_days, page.saturating_mul(size), size);
    Ok(Page::new(content, page, size, gap_days.len()))
}

/// Contiguous sub-sequence starting at `start`, capped at `size` items.
/// Empty when the start index falls beyond the collected set.
fn page_content(days: &[NaiveDate], start: usize, size: usize) -> Vec<NaiveDate> {
    if start >= days.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(days.len());
    days[start..end].to_vec()
}
