use assert_cmd::Command;
use predicates::prelude::*;

fn stockroom(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.arg("--config-dir").arg(config_dir).env_remove("STOCKROOM_LOG");
    cmd
}

#[test]
fn exit_from_main_menu() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to inventory app!"))
        .stdout(predicate::str::contains("Select option: >> "));
}

#[test]
fn default_run_lists_seeded_stock_and_fixture() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .write_stdin("view\nmain\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1       Box"))
        .stdout(predicate::str::contains("4       Screwdriver"))
        .stdout(predicate::str::contains("5       DummyItem      3"));
}

#[test]
fn add_and_edit_through_the_menu() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin("add\nconsole\nBook,3\nmain\nedit\n1,+5\nmain\nexport\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added!"))
        .stdout(predicate::str::contains("Item edited!"))
        .stdout(predicate::str::contains("1       Book           8"));
}

#[test]
fn invalid_entries_recover_to_main() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin("zz\nedit\n7\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User entry is not valid, going back to main menu...",
        ))
        .stdout(predicate::str::contains("Invalid data, no item with ID 7"));
}

#[test]
fn closed_stdin_ends_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin("view\n")
        .assert()
        .success();
}

#[test]
fn config_file_controls_seeding() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "seed_defaults": false, "fixture": { "name": "Crate", "quantity": 2 } }"#,
    )
    .unwrap();

    stockroom(temp_dir.path())
        .write_stdin("view\nmain\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1       Crate          2"))
        .stdout(predicate::str::contains("Box").not());
}

#[test]
fn no_seed_skips_the_configured_fixture() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "seed_defaults": true, "fixture": { "name": "Crate", "quantity": 2 } }"#,
    )
    .unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin("view\nmain\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID      Name"))
        .stdout(predicate::str::contains("Crate").not())
        .stdout(predicate::str::contains("Box").not());
}

#[test]
fn non_utf8_entry_does_not_end_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--no-seed")
        .write_stdin(&b"add\nconsole\n\xb3opata,2\nexit\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input: entry is not valid UTF-8"));
}

#[test]
fn malformed_config_fails_with_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ nope").unwrap();

    stockroom(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn logs_stay_off_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("--verbose")
        .arg("--no-seed")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DB connection").not())
        .stderr(predicate::str::contains("DB connection established"));
}
