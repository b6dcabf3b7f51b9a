//! Session lifecycle manager: the only place that creates or mutates
//! working sessions, working durations and the task's cumulative total.

use crate::core::{auth, breaks};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::duration::WorkingDuration;
use crate::models::identity::Identity;
use crate::models::page::{Page, PAGE_SIZE, SortDirection, SortField};
use crate::models::session::WorkingSession;
use crate::models::task::Task;
use crate::utils::time;
use rusqlite::Connection;

/// What a successful stop recorded, for the caller to render.
#[derive(Debug, Clone)]
pub struct StopSummary {
    pub raw_secs: i64,
    pub net_secs: i64,
    pub task_total_secs: i64,
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Start a working session for the task's designer.
///
/// The read-then-check below gives a friendly message; the partial unique
/// index on active sessions is the actual guard, so two racing starts
/// cannot both commit. A constraint violation surfaces as the same
/// Conflict.
pub fn start_working_session(
    conn: &Connection,
    task: &Task,
    identity: &Identity,
) -> AppResult<()> {
    auth::ensure_current_designer(task, identity)?;

    if queries::find_active_session_by_user(conn, task.designer_id)?.is_some() {
        return Err(AppError::Conflict(
            "there is already an active work session".to_string(),
        ));
    }

    let session = WorkingSession::started(task.designer_id, task.id, time::now());
    match queries::insert_session(conn, &session) {
        Ok(_) => Ok(()),
        Err(ref e) if is_unique_violation(e) => Err(AppError::Conflict(
            "there is already an active work session".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Stop the designer's active session.
///
/// Everything below runs inside one transaction and against a single
/// `now` sample: the session gets its finish time and raw duration, a
/// WorkingDuration records the net (break-adjusted) time, and the task
/// total grows by the net value. Billable time is the net duration, not
/// the raw clock time.
pub fn stop_working_session(
    conn: &mut Connection,
    task: &Task,
    identity: &Identity,
) -> AppResult<StopSummary> {
    auth::ensure_current_designer(task, identity)?;

    let tx = conn.transaction()?;

    let session = queries::find_active_session_by_user(&tx, task.designer_id)?
        .ok_or_else(|| {
            AppError::Conflict("there is no active working session to stop".to_string())
        })?;

    if breaks::has_active_break(&tx, task.designer_id)? {
        return Err(AppError::Conflict(
            "you cannot stop your work during a break".to_string(),
        ));
    }

    let now = time::now();
    let raw_secs = (now - session.work_started).num_seconds();

    let history = queries::find_breaks_by_user(&tx, task.designer_id)?;
    let net_secs = breaks::net_duration(&history, session.work_started, now);

    queries::insert_duration(
        &tx,
        &WorkingDuration {
            id: 0,
            user_id: session.user_id,
            task_name: task.task_name.clone(),
            duration_secs: net_secs,
            date: now,
        },
    )?;
    queries::finish_session(&tx, session.id, now, raw_secs)?;

    let task_total_secs = task.work_duration_secs + net_secs;
    queries::update_task_duration(&tx, task.id, task_total_secs)?;

    tx.commit()?;

    Ok(StopSummary {
        raw_secs,
        net_secs,
        task_total_secs,
    })
}

/// True if the task's designer has any session with no finish time,
/// regardless of which task it was opened against. The by-user (not
/// by-task) check is intentional: a session opened for task A counts as
/// open when checking task B for the same user.
pub fn has_open_session(conn: &Connection, task: &Task) -> AppResult<bool> {
    queries::has_open_session_for_user(conn, task.designer_id)
}

/// One sorted page of the user's sessions (work-list read path).
pub fn user_sessions_page(
    conn: &Connection,
    user_id: i64,
    page: usize,
    sort: SortField,
    direction: SortDirection,
) -> AppResult<Page<WorkingSession>> {
    let total = queries::count_sessions_by_user(conn, user_id)?;
    let content = queries::find_sessions_page(conn, user_id, page, PAGE_SIZE, sort, direction)?;
    Ok(Page::new(content, page, PAGE_SIZE, total))
}

/// One page of the user's recorded net durations, oldest first.
pub fn user_durations_page(
    conn: &Connection,
    user_id: i64,
    page: usize,
) -> AppResult<Page<WorkingDuration>> {
    let total = queries::count_durations_by_user(conn, user_id)?;
    let content = queries::find_durations_page(conn, user_id, page, PAGE_SIZE)?;
    Ok(Page::new(content, page, PAGE_SIZE, total))
}
