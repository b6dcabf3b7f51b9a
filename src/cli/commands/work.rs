use crate::cli::commands::{identity_of, open, require_task, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Start { task, as_user } => {
            let conn = open(cfg)?;
            let user = require_user(&conn, as_user)?;
            let task = require_task(&conn, *task)?;

            lifecycle::start_working_session(&conn, &task, &identity_of(&user))?;
            messages::success(format!("Started working on '{}'.", task.task_name));
        }
        Commands::Stop { task, as_user } => {
            let mut conn = open(cfg)?;
            let user = require_user(&conn, as_user)?;
            let task = require_task(&conn, *task)?;

            let summary = lifecycle::stop_working_session(&mut conn, &task, &identity_of(&user))?;
            messages::success(format!(
                "Stopped working on '{}': {} elapsed, {} net of breaks, task total {}.",
                task.task_name,
                time::format_secs(summary.raw_secs),
                time::format_secs(summary.net_secs),
                time::format_secs(summary.task_total_secs),
            ));
        }
        _ => {}
    }
    Ok(())
}
