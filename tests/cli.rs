use assert_cmd::Command;
use predicates::prelude::*;
#[cfg(not(windows))]
use tempfile::TempDir;

fn deskshot_cmd() -> Command {
    Command::cargo_bin("deskshot").expect("binary exists")
}

#[test]
fn deskshot_help_prints_usage() {
    deskshot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "One-shot desktop screenshot saved as PNG",
        ));
}

#[test]
fn deskshot_version_prints_name() {
    deskshot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deskshot"));
}

#[cfg(not(windows))]
#[test]
fn unsupported_platform_fails_before_writing() {
    let temp = TempDir::new().unwrap();

    deskshot_cmd()
        .env("HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));

    assert!(!temp.path().join("ss.png").exists());
}
