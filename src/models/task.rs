use serde::Serialize;

/// A unit of assignable work. The designer is the only user allowed to
/// start or stop sessions against the task; `work_duration_secs` is the
/// cumulative net worked time, incremented at every session stop.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    pub designer_id: i64,        // ⇔ tasks.designer_id (FK users.id)
    pub work_duration_secs: i64, // cumulative net duration
}
