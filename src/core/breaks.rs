//! Break-time collaborator: the net-duration adjustment contract, the
//! active-break check, and a minimal start/stop adapter so breaks can be
//! recorded at all. Break bookkeeping beyond that is not core business.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::break_time::BreakTime;
use crate::models::identity::Identity;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Net worked seconds for a session window: raw elapsed time minus the
/// time covered by completed breaks overlapping the window. The result
/// is never negative and never exceeds the raw duration.
pub fn net_duration(
    breaks: &[BreakTime],
    started: NaiveDateTime,
    finished: NaiveDateTime,
) -> i64 {
    let raw = (finished - started).num_seconds().max(0);

    let mut on_break = 0i64;
    for brk in breaks {
        if !brk.is_completed() {
            continue;
        }
        let Some(finish) = brk.finish_time else {
            continue;
        };
        let overlap_start = brk.start_time.max(started);
        let overlap_end = finish.min(finished);
        if overlap_end > overlap_start {
            on_break += (overlap_end - overlap_start).num_seconds();
        }
    }

    (raw - on_break).max(0)
}

pub fn has_active_break(conn: &Connection, user_id: i64) -> AppResult<bool> {
    Ok(queries::find_active_break_by_user(conn, user_id)?.is_some())
}

/// Open a break against the caller's active session.
pub fn start_break(conn: &Connection, identity: &Identity) -> AppResult<BreakTime> {
    let session = queries::find_active_session_by_user(conn, identity.user_id)?
        .ok_or_else(|| {
            AppError::Conflict("no active working session to take a break from".to_string())
        })?;

    if has_active_break(conn, identity.user_id)? {
        return Err(AppError::Conflict(
            "there is already an active break".to_string(),
        ));
    }

    let task = queries::find_task_by_id(conn, session.task_id)?
        .ok_or_else(|| AppError::NotFound(format!("task {} not found", session.task_id)))?;

    let mut brk = BreakTime {
        id: 0,
        user_id: identity.user_id,
        session_id: session.id,
        working_at_task_name: task.task_name,
        start_time: time::now(),
        finish_time: None,
        is_active: true,
    };
    brk.id = queries::insert_break(conn, &brk)?;
    Ok(brk)
}

/// Close the caller's open break.
pub fn stop_break(conn: &Connection, identity: &Identity) -> AppResult<BreakTime> {
    let mut brk = queries::find_active_break_by_user(conn, identity.user_id)?
        .ok_or_else(|| AppError::Conflict("there is no active break to stop".to_string()))?;

    let now = time::now();
    queries::finish_break(conn, brk.id, now)?;
    brk.finish_time = Some(now);
    brk.is_active = false;
    Ok(brk)
}
