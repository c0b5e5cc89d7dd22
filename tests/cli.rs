use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_the_flag_surface() {
    Command::cargo_bin("mcrestart")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--server-name")
                .and(predicate::str::contains("--wait"))
                .and(predicate::str::contains("--no-wait"))
                .and(predicate::str::contains("--announce-waiting"))
                .and(predicate::str::contains("--max-wait"))
                .and(predicate::str::contains("--log-dir")),
        );
}

#[test]
fn test_server_name_is_required() {
    Command::cargo_bin("mcrestart")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--server-name"));
}

#[test]
fn test_non_numeric_max_wait_is_rejected() {
    Command::cargo_bin("mcrestart")
        .unwrap()
        .args(["--server-name", "mc", "--max-wait", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-wait"));
}
