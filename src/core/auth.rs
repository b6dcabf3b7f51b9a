//! Authorization contract consumed by the lifecycle manager.

use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::task::Task;

pub fn is_current_designer(task: &Task, identity: &Identity) -> bool {
    task.designer_id == identity.user_id
}

pub fn ensure_current_designer(task: &Task, identity: &Identity) -> AppResult<()> {
    if is_current_designer(task, identity) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "{} is not the designer of task '{}'",
            identity.email, task.task_name
        )))
    }
}
