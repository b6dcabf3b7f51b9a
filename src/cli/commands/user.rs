use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::UserAdd { email, name } = cmd {
        let conn = open(cfg)?;

        if queries::find_user_by_email(&conn, email)?.is_some() {
            return Err(AppError::Conflict(format!(
                "user '{}' is already registered",
                email
            )));
        }

        let id = queries::insert_user(&conn, email, name)?;
        messages::success(format!("Registered user '{}' (id {}).", email, id));
    }
    Ok(())
}
