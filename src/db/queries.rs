//! Explicit store queries (repository pattern). Every cross-entity read
//! or write in the crate goes through one of these functions.

use crate::errors::{AppError, AppResult};
use crate::models::break_time::BreakTime;
use crate::models::duration::WorkingDuration;
use crate::models::page::{SortDirection, SortField};
use crate::models::session::WorkingSession;
use crate::models::task::Task;
use crate::models::user::User;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_ts(s: &str) -> Result<NaiveDateTime> {
    time::parse_db(s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_opt_ts(s: Option<String>) -> Result<Option<NaiveDateTime>> {
    s.as_deref().map(parse_ts).transpose()
}

// ---------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------

pub fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        display_name: row.get("display_name")?,
    })
}

pub fn map_task_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        task_name: row.get("task_name")?,
        designer_id: row.get("designer_id")?,
        work_duration_secs: row.get("work_duration_secs")?,
    })
}

pub fn map_session_row(row: &Row) -> Result<WorkingSession> {
    let started: String = row.get("work_started")?;
    let finished: Option<String> = row.get("work_finished")?;
    let created: String = row.get("created_at")?;

    Ok(WorkingSession {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        task_id: row.get("task_id")?,
        work_started: parse_ts(&started)?,
        work_finished: parse_opt_ts(finished)?,
        duration_secs: row.get("duration_secs")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        created_at: parse_ts(&created)?,
    })
}

pub fn map_duration_row(row: &Row) -> Result<WorkingDuration> {
    let date: String = row.get("date")?;
    Ok(WorkingDuration {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        task_name: row.get("task_name")?,
        duration_secs: row.get("duration_secs")?,
        date: parse_ts(&date)?,
    })
}

pub fn map_break_row(row: &Row) -> Result<BreakTime> {
    let start: String = row.get("start_time")?;
    let finish: Option<String> = row.get("finish_time")?;
    Ok(BreakTime {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        session_id: row.get("session_id")?,
        working_at_task_name: row.get("working_at_task_name")?,
        start_time: parse_ts(&start)?,
        finish_time: parse_opt_ts(finish)?,
        is_active: row.get::<_, i64>("is_active")? == 1,
    })
}

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

pub fn insert_user(conn: &Connection, email: &str, display_name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (email, display_name) VALUES (?1, ?2)",
        params![email, display_name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, email, display_name FROM users WHERE email = ?1",
    )?;
    Ok(stmt.query_row([email], map_user_row).optional()?)
}

// ---------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------

pub fn insert_task(conn: &Connection, task_name: &str, designer_id: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasks (task_name, designer_id) VALUES (?1, ?2)",
        params![task_name, designer_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_task_by_id(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, task_name, designer_id, work_duration_secs FROM tasks WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_task_row).optional()?)
}

pub fn update_task_duration(conn: &Connection, task_id: i64, secs: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE tasks SET work_duration_secs = ?1 WHERE id = ?2",
        params![secs, task_id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Working sessions
// ---------------------------------------------------------------------

/// Insert a freshly started session. Bubbles the raw rusqlite error up so
/// the lifecycle manager can map a unique-index violation to a Conflict.
pub fn insert_session(conn: &Connection, session: &WorkingSession) -> Result<i64> {
    conn.execute(
        "INSERT INTO working_sessions
             (user_id, task_id, work_started, work_finished, duration_secs, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            session.user_id,
            session.task_id,
            time::to_db(session.work_started),
            session.work_finished.map(time::to_db),
            session.duration_secs,
            session.is_active as i64,
            time::to_db(session.created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Stop a session: set finish time and raw duration, clear the active flag.
pub fn finish_session(
    conn: &Connection,
    session_id: i64,
    finished: NaiveDateTime,
    duration_secs: i64,
) -> AppResult<()> {
    conn.execute(
        "UPDATE working_sessions
         SET work_finished = ?1, duration_secs = ?2, is_active = 0
         WHERE id = ?3",
        params![time::to_db(finished), duration_secs, session_id],
    )?;
    Ok(())
}

pub fn find_active_session_by_user(
    conn: &Connection,
    user_id: i64,
) -> AppResult<Option<WorkingSession>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, task_id, work_started, work_finished, duration_secs, is_active, created_at
         FROM working_sessions
         WHERE user_id = ?1 AND is_active = 1",
    )?;
    Ok(stmt.query_row([user_id], map_session_row).optional()?)
}

/// True if the user has any session with no finish time recorded.
pub fn has_open_session_for_user(conn: &Connection, user_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM working_sessions WHERE user_id = ?1 AND work_finished IS NULL LIMIT 1",
    )?;
    Ok(stmt.exists([user_id])?)
}

pub fn count_sessions_by_user(conn: &Connection, user_id: i64) -> AppResult<usize> {
    let mut stmt =
        conn.prepare_cached("SELECT COUNT(*) FROM working_sessions WHERE user_id = ?1")?;
    let n: i64 = stmt.query_row([user_id], |row| row.get(0))?;
    Ok(n as usize)
}

/// One page of a user's sessions with the caller's sort. Column and
/// direction come from whitelisting enums, never from raw input.
pub fn find_sessions_page(
    conn: &Connection,
    user_id: i64,
    page: usize,
    size: usize,
    sort: SortField,
    direction: SortDirection,
) -> AppResult<Vec<WorkingSession>> {
    let sql = format!(
        "SELECT id, user_id, task_id, work_started, work_finished, duration_secs, is_active, created_at
         FROM working_sessions
         WHERE user_id = ?1
         ORDER BY {} {}
         LIMIT ?2 OFFSET ?3",
        sort.column(),
        direction.keyword(),
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![user_id, size as i64, (page * size) as i64],
        map_session_row,
    )?;
    rows.collect::<Result<Vec<_>>>().map_err(Into::into)
}

/// Count sessions the user created inside a timestamp window (inclusive).
/// The fixed-width text format makes string comparison chronological.
pub fn count_sessions_created_between(
    conn: &Connection,
    user_id: i64,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached(
        "SELECT COUNT(*) FROM working_sessions
         WHERE user_id = ?1 AND created_at >= ?2 AND created_at <= ?3",
    )?;
    let n: i64 = stmt.query_row(
        params![user_id, time::to_db(from), time::to_db(to)],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}

// ---------------------------------------------------------------------
// Working durations
// ---------------------------------------------------------------------

pub fn insert_duration(conn: &Connection, duration: &WorkingDuration) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO working_durations (user_id, task_name, duration_secs, date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            duration.user_id,
            duration.task_name,
            duration.duration_secs,
            time::to_db(duration.date),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn count_durations_by_user(conn: &Connection, user_id: i64) -> AppResult<usize> {
    let mut stmt =
        conn.prepare_cached("SELECT COUNT(*) FROM working_durations WHERE user_id = ?1")?;
    let n: i64 = stmt.query_row([user_id], |row| row.get(0))?;
    Ok(n as usize)
}

pub fn find_durations_page(
    conn: &Connection,
    user_id: i64,
    page: usize,
    size: usize,
) -> AppResult<Vec<WorkingDuration>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, task_name, duration_secs, date
         FROM working_durations
         WHERE user_id = ?1
         ORDER BY date ASC
         LIMIT ?2 OFFSET ?3",
    )?;
    let rows = stmt.query_map(
        params![user_id, size as i64, (page * size) as i64],
        map_duration_row,
    )?;
    rows.collect::<Result<Vec<_>>>().map_err(Into::into)
}

// ---------------------------------------------------------------------
// Break times
// ---------------------------------------------------------------------

pub fn insert_break(conn: &Connection, brk: &BreakTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO break_times
             (user_id, session_id, working_at_task_name, start_time, finish_time, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            brk.user_id,
            brk.session_id,
            brk.working_at_task_name,
            time::to_db(brk.start_time),
            brk.finish_time.map(time::to_db),
            brk.is_active as i64,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full break history for a user, oldest first.
pub fn find_breaks_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<BreakTime>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, session_id, working_at_task_name, start_time, finish_time, is_active
         FROM break_times
         WHERE user_id = ?1
         ORDER BY start_time ASC",
    )?;
    let rows = stmt.query_map([user_id], map_break_row)?;
    rows.collect::<Result<Vec<_>>>().map_err(Into::into)
}

pub fn find_active_break_by_user(
    conn: &Connection,
    user_id: i64,
) -> AppResult<Option<BreakTime>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, session_id, working_at_task_name, start_time, finish_time, is_active
         FROM break_times
         WHERE user_id = ?1 AND is_active = 1",
    )?;
    Ok(stmt.query_row([user_id], map_break_row).optional()?)
}

pub fn finish_break(conn: &Connection, break_id: i64, finished: NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE break_times SET finish_time = ?1, is_active = 0 WHERE id = ?2",
        params![time::to_db(finished), break_id],
    )?;
    Ok(())
}
