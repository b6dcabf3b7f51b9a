use predicates::str::contains;

mod common;
use common::{active_session_count, init_with_user_and_task, open, setup_test_db, wt};

#[test]
fn test_start_and_stop_records_duration() {
    let db = setup_test_db("start_stop");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .success()
        .stdout(contains("Started working on 'logo design'"));

    wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
        .assert()
        .success()
        .stdout(contains("Stopped working on 'logo design'"));

    // exactly one WorkingDuration recorded, snapshotting the task name
    wt().args(["--db", &db, "durations", "--as", "alice@corp.test"])
        .assert()
        .success()
        .stdout(contains("1 total"))
        .stdout(contains("logo design"));

    // session no longer active
    let conn = open(&db);
    assert_eq!(active_session_count(&conn, 1), 0);
}

#[test]
fn test_start_twice_is_conflict() {
    let db = setup_test_db("start_twice");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .success();

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Conflict"))
        .stderr(contains("already an active work session"));

    // the invariant held: still exactly one active session
    let conn = open(&db);
    assert_eq!(active_session_count(&conn, 1), 1);
}

#[test]
fn test_start_on_other_task_same_user_is_conflict() {
    let db = setup_test_db("cross_task_start");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");
    wt().args([
        "--db",
        &db,
        "task-add",
        "brochure",
        "--designer",
        "alice@corp.test",
    ])
    .assert()
    .success();

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .success();

    // one active session per user, regardless of task
    wt().args(["--db", &db, "start", "2", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Conflict"));
}

#[test]
fn test_stop_without_active_session_is_conflict() {
    let db = setup_test_db("stop_nothing");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Conflict"))
        .stderr(contains("no active working session"));
}

#[test]
fn test_start_by_non_designer_is_forbidden() {
    let db = setup_test_db("forbidden");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");
    wt().args(["--db", &db, "user-add", "bob@corp.test"])
        .assert()
        .success();

    wt().args(["--db", &db, "start", "1", "--as", "bob@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));

    wt().args(["--db", &db, "stop", "1", "--as", "bob@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));
}

#[test]
fn test_stop_during_break_is_conflict() {
    let db = setup_test_db("stop_during_break");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
        .assert()
        .success();
    wt().args(["--db", &db, "break-start", "--as", "alice@corp.test"])
        .assert()
        .success();

    wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("during a break"));

    // after closing the break the stop goes through
    wt().args(["--db", &db, "break-stop", "--as", "alice@corp.test"])
        .assert()
        .success();
    wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
        .assert()
        .success();
}

#[test]
fn test_break_requires_active_session() {
    let db = setup_test_db("break_no_session");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "break-start", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("no active working session"));

    wt().args(["--db", &db, "break-stop", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("no active break"));
}

#[test]
fn test_task_total_equals_sum_of_net_durations() {
    let db = setup_test_db("task_total");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    for _ in 0..3 {
        wt().args(["--db", &db, "start", "1", "--as", "alice@corp.test"])
            .assert()
            .success();
        wt().args(["--db", &db, "stop", "1", "--as", "alice@corp.test"])
            .assert()
            .success();
    }

    let conn = open(&db);
    let task_total: i64 = conn
        .query_row(
            "SELECT work_duration_secs FROM tasks WHERE id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let durations_sum: i64 = conn
        .query_row(
            "SELECT COALESCE(SUM(duration_secs), 0) FROM working_durations WHERE user_id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM working_durations WHERE user_id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(task_total, durations_sum);
    assert_eq!(active_session_count(&conn, 1), 0);
}

#[test]
fn test_unknown_user_and_task_are_not_found() {
    let db = setup_test_db("not_found");
    init_with_user_and_task(&db, "alice@corp.test", "logo design");

    wt().args(["--db", &db, "start", "1", "--as", "ghost@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Not found"));

    wt().args(["--db", &db, "start", "99", "--as", "alice@corp.test"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}
