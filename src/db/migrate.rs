//! Schema migrations tracked through `PRAGMA user_version`.
//! Each migration runs at most once; version bumps happen inside the
//! same transaction as the migration itself.

use rusqlite::{Connection, Result};

const CURRENT_VERSION: i32 = 1;

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Apply all migrations newer than the stored schema version.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let mut version = schema_version(conn)?;

    while version < CURRENT_VERSION {
        let next = version + 1;
        match next {
            1 => migrate_v1(conn)?,
            _ => break,
        }
        conn.execute_batch(&format!("PRAGMA user_version = {}", next))?;
        version = next;
    }

    Ok(())
}

/// v1: covering indexes for the per-user read paths (session listing and
/// the day-window scan used by the gap scanner).
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_sessions_user
            ON working_sessions(user_id);
        CREATE INDEX IF NOT EXISTS idx_sessions_user_created
            ON working_sessions(user_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_durations_user
            ON working_durations(user_id);
        CREATE INDEX IF NOT EXISTS idx_breaks_user
            ON break_times(user_id);
        ",
    )
}
