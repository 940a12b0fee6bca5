use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn trek_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trek").expect("Failed to find trek binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_add_trip_success() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");

    trek_cmd()
        .args([
            "--data-file",
            data_path.to_str().unwrap(),
            "trip",
            "add",
            "Lisbon",
            "--start",
            "2026-06-01",
            "--end",
            "2026-06-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon"))
        .stdout(predicate::str::contains("2026-06-01"))
        .stdout(predicate::str::contains("2026-06-10"));
}

#[test]
fn test_cli_add_trip_with_budget_and_notes() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");

    trek_cmd()
        .args([
            "--data-file",
            data_path.to_str().unwrap(),
            "trip",
            "add",
            "Kyoto",
            "--start",
            "2026-04-01",
            "--end",
            "2026-04-08",
            "--budget",
            "2500",
            "--notes",
            "Cherry blossom season",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyoto"))
        .stdout(predicate::str::contains("Cherry blossom season"));
}

#[test]
fn test_cli_add_trip_rejects_conflict() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    // Overlapping range must be rejected and the overlapping trip named
    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Porto",
            "--start", "2026-06-05", "--end", "2026-06-15",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lisbon"));

    // The rejected trip must not have been stored
    trek_cmd()
        .args(["--data-file", data_arg, "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Porto").not());
}

#[test]
fn test_cli_add_trip_accepts_adjacent_dates() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    // Back-to-back ranges share no day, so no conflict
    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Porto",
            "--start", "2026-06-11", "--end", "2026-06-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Porto"));
}

#[test]
fn test_cli_add_trip_rejects_inverted_range() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");

    trek_cmd()
        .args([
            "--data-file",
            data_path.to_str().unwrap(),
            "trip",
            "add",
            "Backwards",
            "--start",
            "2026-06-10",
            "--end",
            "2026-06-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_trip_move_preserves_duration() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    // Ten days starting July 1 must end July 10
    trek_cmd()
        .args(["--data-file", data_arg, "trip", "move", "1", "2026-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-07-01"))
        .stdout(predicate::str::contains("2026-07-10"));
}

#[test]
fn test_cli_trip_move_invalid_target_fails() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    trek_cmd()
        .args(["--data-file", data_arg, "trip", "move", "1", "not-a-date"])
        .assert()
        .failure();
}

#[test]
fn test_cli_trip_status_and_calendar_suppression() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    trek_cmd()
        .args(["--data-file", data_arg, "trip", "status", "1", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    // Completed trips never appear on the calendar
    trek_cmd()
        .args(["--data-file", data_arg, "day", "2026-06-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon").not());
}

#[test]
fn test_cli_task_add_and_toggle() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "task", "add", "Book flights",
            "--due", "2026-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] Book flights"));

    trek_cmd()
        .args(["--data-file", data_arg, "task", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Book flights"));
}

#[test]
fn test_cli_task_add_linked_to_missing_trip_fails() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");

    trek_cmd()
        .args([
            "--data-file",
            data_path.to_str().unwrap(),
            "task",
            "add",
            "Orphan",
            "--trip",
            "42",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_day_view_lists_events() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();
    trek_cmd()
        .args([
            "--data-file", data_arg, "task", "add", "Pack bags",
            "--due", "2026-06-05",
        ])
        .assert()
        .success();

    trek_cmd()
        .args(["--data-file", data_arg, "day", "2026-06-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday, June 05, 2026"))
        .stdout(predicate::str::contains("Lisbon"))
        .stdout(predicate::str::contains("Pack bags"));
}

#[test]
fn test_cli_day_view_filters() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();
    trek_cmd()
        .args([
            "--data-file", data_arg, "task", "add", "Pack bags",
            "--due", "2026-06-05",
        ])
        .assert()
        .success();

    trek_cmd()
        .args(["--data-file", data_arg, "day", "2026-06-05", "--no-trips"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon").not())
        .stdout(predicate::str::contains("Pack bags"));

    // Hiding both task states empties the task list regardless of status
    trek_cmd()
        .args([
            "--data-file", data_arg, "day", "2026-06-05",
            "--no-pending", "--no-completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack bags").not())
        .stdout(predicate::str::contains("Lisbon"));
}

#[test]
fn test_cli_month_view_renders_grid() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    trek_cmd()
        .args([
            "--data-file", data_arg, "month", "--year", "2026", "--month", "6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2026"))
        .stdout(predicate::str::contains("Sun"))
        .stdout(predicate::str::contains("5*"));
}

#[test]
fn test_cli_month_view_rejects_invalid_month() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");

    trek_cmd()
        .args([
            "--data-file",
            data_path.to_str().unwrap(),
            "month",
            "--year",
            "2026",
            "--month",
            "13",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_trip_remove() {
    let temp_dir = create_cli_test_environment();
    let data_path = temp_dir.path().join("trek.json");
    let data_arg = data_path.to_str().unwrap();

    trek_cmd()
        .args([
            "--data-file", data_arg, "trip", "add", "Lisbon",
            "--start", "2026-06-01", "--end", "2026-06-10",
        ])
        .assert()
        .success();

    trek_cmd()
        .args(["--data-file", data_arg, "trip", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed trip"));

    trek_cmd()
        .args(["--data-file", data_arg, "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}
