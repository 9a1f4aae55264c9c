use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn trim_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trim").expect("Failed to find trim binary");
    cmd.arg("--no-color");
    cmd
}

/// Seed a one-service, one-barber catalog in the given database
fn seed_catalog(db_arg: &str) {
    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "service",
            "add",
            "Haircut",
            "--price",
            "30.00",
        ])
        .assert()
        .success();

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "barber",
            "add",
            "Elena",
            "--day",
            "2026-09-01=09:00,09:30,10:30",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_add_service_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "service",
            "add",
            "Haircut",
            "--price",
            "30.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Haircut"))
        .stdout(predicate::str::contains("## Service 1"));
}

#[test]
fn test_cli_add_service_with_promotion() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "service",
            "add",
            "Royal Shave",
            "--price",
            "45.00",
            "--duration",
            "45 min",
            "--promotion",
            "vip",
            "--discount",
            "25",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Royal Shave"))
        .stdout(predicate::str::contains("45 min"))
        .stdout(predicate::str::contains("25% off the first occurrence"));
}

#[test]
fn test_cli_list_empty_services() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "service",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No services in the catalog."));
}

#[test]
fn test_cli_show_service() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args(["--database-file", db_arg, "service", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Service 1: Haircut"));

    trim_cmd()
        .args(["--database-file", db_arg, "service", "show", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service 99 not found"));
}

#[test]
fn test_cli_show_barber() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args(["--database-file", db_arg, "barber", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Barber 1: Elena"));

    trim_cmd()
        .args(["--database-file", db_arg, "barber", "show", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barber 99 not found"));
}

#[test]
fn test_cli_add_barber_with_schedule() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "barber",
            "add",
            "Elena",
            "--specialty",
            "fades",
            "--day",
            "2026-09-01=09:00,09:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Barber 1: Elena"))
        .stdout(predicate::str::contains("fades"))
        .stdout(predicate::str::contains("2026-09-01: 09:00, 09:30"));
}

#[test]
fn test_cli_add_barber_rejects_off_grid_slot() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "barber",
            "add",
            "Elena",
            "--day",
            "2026-09-01=09:15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("09:15"));
}

#[test]
fn test_cli_availability_lists_open_slots() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "barber",
            "availability",
            "1",
            "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open slots for barber 1 on 2026-09-01"))
        .stdout(predicate::str::contains("09:00, 09:30, 10:30"));
}

#[test]
fn test_cli_availability_empty_for_unscheduled_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "barber",
            "availability",
            "1",
            "2026-09-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No slots available for this day."));
}

#[test]
fn test_cli_book_and_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01,09:00",
            "--client",
            "Ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled 1 appointment(s):"))
        .stdout(predicate::str::contains("2026-09-01 09:00"))
        .stdout(predicate::str::contains("Total price:"))
        .stdout(predicate::str::contains("30.00"))
        .stdout(predicate::str::contains("Confirmed booking with ID: 1"));

    // The confirmed booking occupies the slot on later queries
    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "barber",
            "availability",
            "1",
            "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30, 10:30"));

    trim_cmd()
        .args(["--database-file", db_arg, "bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Booking 1 for Ana"));
}

#[test]
fn test_cli_book_two_occurrences_packs_consecutive_slots() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "--service",
            "1",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01,09:00",
            "--client",
            "Ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled 2 appointment(s):"))
        .stdout(predicate::str::contains("2026-09-01 09:00"))
        .stdout(predicate::str::contains("2026-09-01 09:30"))
        .stdout(predicate::str::contains("60.00"));
}

#[test]
fn test_cli_book_without_picks_reports_unassigned() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args(["--database-file", db_arg, "book", "--service", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 service(s) still unassigned; nothing was saved.",
        ));

    trim_cmd()
        .args(["--database-file", db_arg, "bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_book_without_client_leaves_nothing_saved() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    // Fully placed but unconfirmed: the run reports readiness and the
    // session state dies with the process
    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01,09:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-09-01 09:00"))
        .stdout(predicate::str::contains("Re-run with --client NAME to confirm."));

    trim_cmd()
        .args(["--database-file", db_arg, "bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_book_rejects_taken_slot() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01,09:00",
            "--client",
            "Ana",
        ])
        .assert()
        .success();

    trim_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01,09:00",
            "--client",
            "Bram",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("09:00"));
}

#[test]
fn test_cli_book_unknown_service_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "book",
            "--service",
            "42",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("42"));
}

#[test]
fn test_cli_rejects_malformed_pick() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trim_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "book",
            "--service",
            "1",
            "--pick",
            "1,2026-09-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BARBER,DATE,TIME"));
}

#[test]
fn test_cli_default_command_lists_services() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    seed_catalog(db_arg);

    trim_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Haircut"));
}
