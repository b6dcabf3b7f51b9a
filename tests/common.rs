#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;
use worktrack::db::queries;
use worktrack::models::session::WorkingSession;
use worktrack::utils::time;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema and register a user + one task assigned to them.
/// Returns nothing; ids are deterministic (first user = 1, first task = 1).
pub fn init_with_user_and_task(db_path: &str, email: &str, task_name: &str) {
    wt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
    wt().args(["--db", db_path, "user-add", email])
        .assert()
        .success();
    wt().args(["--db", db_path, "task-add", task_name, "--designer", email])
        .assert()
        .success();
}

/// Open the test DB directly for library-level assertions and seeding.
pub fn open(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    worktrack::db::init_db(&conn).expect("init db");
    conn
}

pub fn ts(s: &str) -> NaiveDateTime {
    time::parse_db(s).expect("valid timestamp")
}

/// Seed a completed session with exact timestamps (raw duration derived).
pub fn seed_finished_session(
    conn: &Connection,
    user_id: i64,
    task_id: i64,
    started: &str,
    finished: &str,
) -> i64 {
    let started = ts(started);
    let finished = ts(finished);
    let session = WorkingSession {
        id: 0,
        user_id,
        task_id,
        work_started: started,
        work_finished: Some(finished),
        duration_secs: Some((finished - started).num_seconds()),
        is_active: false,
        created_at: started,
    };
    queries::insert_session(conn, &session).expect("seed session")
}

pub fn active_session_count(conn: &Connection, user_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM working_sessions WHERE user_id = ?1 AND is_active = 1",
        [user_id],
        |row| row.get(0),
    )
    .expect("count active sessions")
}
