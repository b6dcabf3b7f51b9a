//! SQLite persistence layer: schema creation, migrations and queries.
//! All cross-entity reads go through the explicit query functions in
//! [`queries`]; entities hold plain identifier fields, never object graphs.

use rusqlite::{Connection, Result};
use std::path::Path;

pub mod migrate;
pub mod queries;

pub use migrate::run_pending_migrations;

pub fn open_db(path: &str) -> Result<Connection> {
    Connection::open(Path::new(path))
}

/// Initialize the database schema and run pending migrations.
///
/// The partial unique index on `working_sessions` is the transactional
/// guard for the one-active-session-per-user rule: two racing starts
/// cannot both commit an active row.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            email        TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name          TEXT NOT NULL,
            designer_id        INTEGER NOT NULL REFERENCES users(id),
            work_duration_secs INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS working_sessions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            task_id       INTEGER NOT NULL REFERENCES tasks(id),
            work_started  TEXT NOT NULL,          -- YYYY-MM-DD HH:MM:SS
            work_finished TEXT,                   -- NULL while active
            duration_secs INTEGER,                -- raw elapsed, NULL while active
            is_active     INTEGER NOT NULL DEFAULT 1,
            created_at    TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS one_active_session_per_user
            ON working_sessions(user_id) WHERE is_active = 1;

        CREATE TABLE IF NOT EXISTS working_durations (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            task_name     TEXT NOT NULL,          -- snapshot, not a FK
            duration_secs INTEGER NOT NULL,       -- net (break-adjusted)
            date          TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS break_times (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id              INTEGER NOT NULL REFERENCES users(id),
            session_id           INTEGER NOT NULL REFERENCES working_sessions(id),
            working_at_task_name TEXT NOT NULL,
            start_time           TEXT NOT NULL,
            finish_time          TEXT,            -- NULL while active
            is_active            INTEGER NOT NULL DEFAULT 1
        );
        ",
    )?;
    run_pending_migrations(conn)?;
    Ok(())
}
