use crate::cli::commands::{open, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::TaskAdd { name, designer } = cmd {
        let conn = open(cfg)?;
        let user = require_user(&conn, designer)?;
        let id = queries::insert_task(&conn, name, user.id)?;
        messages::success(format!(
            "Created task '{}' (id {}) assigned to {}.",
            name, id, designer
        ));
    }
    Ok(())
}
