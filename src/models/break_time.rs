use chrono::NaiveDateTime;
use serde::Serialize;

/// A break taken during a working session. The core consumes breaks only
/// through the net-duration adjustment and the active-break check.
#[derive(Debug, Clone, Serialize)]
pub struct BreakTime {
    pub id: i64,
    pub user_id: i64,
    pub session_id: i64,
    pub working_at_task_name: String,
    pub start_time: NaiveDateTime,
    pub finish_time: Option<NaiveDateTime>, // NULL while active
    pub is_active: bool,
}

impl BreakTime {
    /// Completed breaks are the only ones counted by the adjustment.
    pub fn is_completed(&self) -> bool {
        !self.is_active && self.finish_time.is_some()
    }
}
