//! CLI smoke tests. These exercise argument parsing and local validation
//! only; nothing here talks to an annotation server.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("anno-gateway")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("annotate"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_annotate_help_shows_server_flags() {
    Command::cargo_bin("anno-gateway")
        .unwrap()
        .args(["annotate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--annotation-host"))
        .stdout(predicate::str::contains("--annotation-port"));
}

#[test]
fn test_serve_help_shows_api_flag() {
    Command::cargo_bin("anno-gateway")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--api"));
}

#[test]
fn test_annotate_rejects_text_without_period() {
    // Validation happens before any network traffic
    Command::cargo_bin("anno-gateway")
        .unwrap()
        .args(["annotate", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sentence"));
}
