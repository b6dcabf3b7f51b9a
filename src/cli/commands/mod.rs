//! One handler module per subcommand, plus the small shared helpers the
//! adapters use to resolve collaborators (user, task, identity).

pub mod anomalies;
pub mod breaks;
pub mod config;
pub mod durations;
pub mod gaps;
pub mod init;
pub mod list;
pub mod task;
pub mod user;
pub mod work;

use crate::config::Config;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::page::{SortDirection, SortField};
use crate::models::task::Task;
use crate::models::user::User;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

pub(crate) fn open(cfg: &Config) -> AppResult<Connection> {
    Ok(db::open_db(&cfg.database)?)
}

pub(crate) fn require_user(conn: &Connection, email: &str) -> AppResult<User> {
    db::queries::find_user_by_email(conn, email)?
        .ok_or_else(|| AppError::NotFound(format!("user '{}' has not been found", email)))
}

pub(crate) fn require_task(conn: &Connection, id: i64) -> AppResult<Task> {
    db::queries::find_task_by_id(conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("task {} has not been found", id)))
}

pub(crate) fn identity_of(user: &User) -> Identity {
    Identity::new(user.id, user.email.clone())
}

pub(crate) fn parse_sort(sort: &str, direction: &str) -> AppResult<(SortField, SortDirection)> {
    let field =
        SortField::from_str(sort).ok_or_else(|| AppError::InvalidSort(sort.to_string()))?;
    let dir = SortDirection::from_str(direction)
        .ok_or_else(|| AppError::InvalidDirection(direction.to_string()))?;
    Ok((field, dir))
}

pub(crate) fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn emit_json<T: Serialize>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
