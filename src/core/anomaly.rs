//! Anomaly detector: flags sessions whose raw duration falls outside the
//! plausible working range.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::page::{Page, PAGE_SIZE, SortDirection, SortField};
use crate::models::session::WorkingSession;
use rusqlite::Connection;

/// Strict bounds: exactly 8h or exactly 5m is still regular.
pub const MAX_REGULAR_SECS: i64 = 8 * 3600;
pub const MIN_REGULAR_SECS: i64 = 5 * 60;

/// A session is anomalous when its raw duration is strictly over 8 hours
/// or strictly under 5 minutes. Sessions still running have no duration
/// and never match.
pub fn is_anomalous(session: &WorkingSession) -> bool {
    match session.duration_secs {
        Some(secs) => secs > MAX_REGULAR_SECS || secs < MIN_REGULAR_SECS,
        None => false,
    }
}

/// One page of the user's sessions, filtered down to the anomalous ones.
///
/// Filtering happens after pagination: the reported total is the
/// pre-filter session count, not the number of anomalies. Known
/// limitation, kept as-is so page numbering stays aligned with the
/// plain session listing.
pub fn find_anomalous_sessions(
    conn: &Connection,
    user_id: i64,
    page: usize,
    sort: SortField,
    direction: SortDirection,
) -> AppResult<Page<WorkingSession>> {
    let total = queries::count_sessions_by_user(conn, user_id)?;
    let sessions = queries::find_sessions_page(conn, user_id, page, PAGE_SIZE, sort, direction)?;

    let filtered: Vec<WorkingSession> = sessions.into_iter().filter(is_anomalous).collect();

    Ok(Page::new(filtered, page, PAGE_SIZE, total))
}
