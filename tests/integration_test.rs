use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todo(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.current_dir(temp_dir);
    cmd.env_remove("TODO_DB");
    cmd
}

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();

    // A: due tomorrow, high
    todo(&temp_dir)
        .args(["add", "Task A", "--due", "2026-10-18", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task #1"))
        .stdout(predicate::str::contains("Task added successfully"));

    // B: overdue, low by default
    todo(&temp_dir)
        .args(["add", "Task B", "--due", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task #2"));

    // C: due tomorrow, low, completed
    todo(&temp_dir)
        .args(["add", "Task C", "--due", "2026-10-18"])
        .assert()
        .success();
    todo(&temp_dir)
        .args(["toggle", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task #3 is now Completed"));

    let output = todo(&temp_dir)
        .args(["list", "--today", "2026-10-17"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let b = stdout.find("Task B").unwrap();
    let a = stdout.find("Task A").unwrap();
    let c = stdout.find("Task C").unwrap();
    assert!(b < a && a < c, "unexpected order:\n{stdout}");

    todo(&temp_dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted successfully"));

    // ids are not reused after a delete
    todo(&temp_dir)
        .args(["add", "Task D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task #4"));

    todo(&temp_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks have been cleared"));

    todo(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_edit_keeps_id_and_status() {
    let temp_dir = TempDir::new().unwrap();

    todo(&temp_dir).args(["add", "Draft"]).assert().success();
    todo(&temp_dir).args(["toggle", "1"]).assert().success();
    todo(&temp_dir)
        .args(["edit", "1", "Final", "--priority", "medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task #1: Final"));

    todo(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 1"#))
        .stdout(predicate::str::contains(r#""task": "Final""#))
        .stdout(predicate::str::contains(r#""priority": "medium""#))
        .stdout(predicate::str::contains(r#""completed": true"#));
}

#[test]
fn test_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();

    todo(&temp_dir)
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task #7 not found"));

    todo(&temp_dir)
        .args(["toggle", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task #7 not found"));
}

#[test]
fn test_invalid_input_rejected() {
    let temp_dir = TempDir::new().unwrap();

    todo(&temp_dir)
        .args(["add", "x", "--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid priority"));

    todo(&temp_dir)
        .args(["add", "x", "--due", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid due date"));
}

#[test]
fn test_db_flag_and_env() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("custom.db");

    todo(&temp_dir)
        .args(["--db", db.to_str().unwrap(), "add", "Elsewhere"])
        .assert()
        .success();
    assert!(db.exists());

    todo(&temp_dir)
        .env("TODO_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));

    // default database is untouched
    todo(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_shell_session() {
    let temp_dir = TempDir::new().unwrap();

    todo(&temp_dir)
        .arg("shell")
        .write_stdin("add \"Buy oat milk\" --due 2026-10-20\n\ntoggle 1\nbogus\nquit\nadd never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully"))
        .stdout(predicate::str::contains("Buy oat milk"))
        .stdout(predicate::str::contains("Mark as Pending"))
        .stdout(predicate::str::contains("never").not());

    todo(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""completed": true"#));
}
