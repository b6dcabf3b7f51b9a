use chrono::NaiveDateTime;
use serde::Serialize;

/// A timed working session against a task.
///
/// Invariants:
/// - at most one session per user is active at any time;
/// - `duration_secs` is set if and only if the session is inactive and
///   `work_finished` is set (raw elapsed time, not break-adjusted).
#[derive(Debug, Clone, Serialize)]
pub struct WorkingSession {
    pub id: i64,
    pub user_id: i64,                        // ⇔ working_sessions.user_id
    pub task_id: i64,                        // ⇔ working_sessions.task_id
    pub work_started: NaiveDateTime,         // ⇔ work_started (TEXT)
    pub work_finished: Option<NaiveDateTime>, // NULL while active
    pub duration_secs: Option<i64>,          // NULL while active
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl WorkingSession {
    /// Constructor for a freshly started session: active, no finish time,
    /// `created_at` = start time.
    pub fn started(user_id: i64, task_id: i64, now: NaiveDateTime) -> Self {
        Self {
            id: 0,
            user_id,
            task_id,
            work_started: now,
            work_finished: None,
            duration_secs: None,
            is_active: true,
            created_at: now,
        }
    }
}
