use chrono::NaiveDate;
use predicates::str::contains;
use serde_json::Value;
use worktrack::core::lifecycle;
use worktrack::db::queries;
use worktrack::models::page::{PAGE_SIZE, SortDirection, SortField};

mod common;
use common::{open, seed_finished_session, setup_test_db, wt};

fn seed_user_and_task(conn: &rusqlite::Connection) -> (i64, i64) {
    let user_id = queries::insert_user(conn, "alice@corp.test", "Alice").unwrap();
    let task_id = queries::insert_task(conn, "logo design", user_id).unwrap();
    (user_id, task_id)
}

/// One finished 8h session per day starting at `first`, `n` days long.
fn seed_days(conn: &rusqlite::Connection, user_id: i64, task_id: i64, first: &str, n: usize) {
    let mut day = NaiveDate::parse_from_str(first, "%Y-%m-%d").unwrap();
    for _ in 0..n {
        let started = format!("{} 09:00:00", day);
        let finished = format!("{} 17:00:00", day);
        seed_finished_session(conn, user_id, task_id, &started, &finished);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn session_pages_are_capped_at_fifty() {
    let db = setup_test_db("list_paging");
    let conn = open(&db);
    let (user_id, task_id) = seed_user_and_task(&conn);
    seed_days(&conn, user_id, task_id, "2024-01-01", 55);

    let page0 =
        lifecycle::user_sessions_page(&conn, user_id, 0, SortField::Id, SortDirection::Asc)
            .unwrap();
    assert_eq!(page0.content.len(), PAGE_SIZE);
    assert_eq!(page0.total_elements, 55);
    assert_eq!(page0.total_pages(), 2);

    let page1 =
        lifecycle::user_sessions_page(&conn, user_id, 1, SortField::Id, SortDirection::Asc)
            .unwrap();
    assert_eq!(page1.content.len(), 5);
}

#[test]
fn sessions_sort_by_start_time_descending() {
    let db = setup_test_db("list_sort");
    let conn = open(&db);
    let (user_id, task_id) = seed_user_and_task(&conn);
    seed_days(&conn, user_id, task_id, "2024-01-01", 3);

    let page = lifecycle::user_sessions_page(
        &conn,
        user_id,
        0,
        SortField::WorkStarted,
        SortDirection::Desc,
    )
    .unwrap();

    let starts: Vec<_> = page.content.iter().map(|s| s.work_started).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(starts, sorted);
}

#[test]
fn list_command_emits_json_page() {
    let db = setup_test_db("list_json");
    let conn = open(&db);
    let (user_id, task_id) = seed_user_and_task(&conn);
    seed_days(&conn, user_id, task_id, "2024-01-01", 2);
    drop(conn);

    let output = wt()
        .args([
            "--db",
            &db,
            "list",
            "--as",
            "alice@corp.test",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["total_elements"], 2);
    assert_eq!(page["content"].as_array().unwrap().len(), 2);
    assert_eq!(page["size"], 50);
}

#[test]
fn invalid_sort_field_is_rejected() {
    let db = setup_test_db("list_bad_sort");
    let conn = open(&db);
    seed_user_and_task(&conn);
    drop(conn);

    wt().args([
        "--db",
        &db,
        "list",
        "--as",
        "alice@corp.test",
        "--sort",
        "email; DROP TABLE users",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid sort field"));
}

#[test]
fn durations_listing_shows_task_snapshot_after_rename() {
    let db = setup_test_db("durations_snapshot");
    let conn = open(&db);
    let (user_id, task_id) = seed_user_and_task(&conn);
    drop(conn);

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .success();
    wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
        .assert()
        .success();

    // rename the task after the fact: the recorded duration keeps the
    // original name snapshot
    let conn = open(&db);
    conn.execute(
        "UPDATE tasks SET task_name = 'rebranding' WHERE id = ?1",
        [task_id],
    )
    .unwrap();
    let page = lifecycle::user_durations_page(&conn, user_id, 0).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].task_name, "logo design");
}
