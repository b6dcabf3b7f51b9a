use crate::cli::commands::{identity_of, open, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breaks;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::BreakStart { as_user } => {
            let conn = open(cfg)?;
            let user = require_user(&conn, as_user)?;

            let brk = breaks::start_break(&conn, &identity_of(&user))?;
            messages::success(format!(
                "Break started at {} (working at '{}').",
                time::to_db(brk.start_time),
                brk.working_at_task_name
            ));
        }
        Commands::BreakStop { as_user } => {
            let conn = open(cfg)?;
            let user = require_user(&conn, as_user)?;

            let brk = breaks::stop_break(&conn, &identity_of(&user))?;
            let taken = brk
                .finish_time
                .map(|f| (f - brk.start_time).num_seconds())
                .unwrap_or(0);
            messages::success(format!("Break stopped after {}.", time::format_secs(taken)));
        }
        _ => {}
    }
    Ok(())
}
