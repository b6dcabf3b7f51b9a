use chrono::NaiveDateTime;
use serde::Serialize;

/// Net (break-adjusted) worked time recorded once per completed session.
/// Immutable after creation. `task_name` is a denormalized snapshot, not
/// a live task reference.
#[derive(Debug, Clone, Serialize)]
pub struct WorkingDuration {
    pub id: i64,
    pub user_id: i64,
    pub task_name: String,
    pub duration_secs: i64,
    pub date: NaiveDateTime,
}
