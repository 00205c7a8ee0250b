/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::ArchiveBuilder;
use predicates::prelude::*;

fn sample_archive(dir: &std::path::Path) -> std::path::PathBuf {
    ArchiveBuilder::new()
        .thread("Road Trip")
        .message("Alice", "Thursday, 14 June 2018 at 21:03 UTC")
        .body_text("see you there")
        .message("Bob", "Friday, 15 June 2018 at 09:12 UTC")
        .body_text("running late")
        .write_to(dir)
}

#[test]
fn test_cli_exports_next_to_archive_by_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let archive = sample_archive(dir.path());

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.arg(&archive)
        .assert()
        .success()
        .stderr(predicate::str::contains("messages exported"))
        .stderr(predicate::str::contains("messages-text.tsv"))
        .stderr(predicate::str::contains("messages-users.tsv"))
        .stderr(predicate::str::contains("messages-threads.tsv"));

    assert!(dir.path().join("messages-text.tsv").exists());
    assert!(dir.path().join("messages-users.tsv").exists());
    assert!(dir.path().join("messages-threads.tsv").exists());
}

#[test]
fn test_cli_output_flag_redirects_tables() {
    let dir = tempfile::TempDir::new().unwrap();
    let out_dir = tempfile::TempDir::new().unwrap();
    let archive = sample_archive(dir.path());

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.arg(&archive).arg("-o").arg(out_dir.path()).assert().success();

    assert!(out_dir.path().join("messages-text.tsv").exists());
    assert!(out_dir.path().join("messages-users.tsv").exists());
    assert!(out_dir.path().join("messages-threads.tsv").exists());
    assert!(!dir.path().join("messages-text.tsv").exists());
}

#[test]
fn test_cli_missing_archive_fails() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.arg("/nonexistent/messages.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open archive file"));
}

#[test]
fn test_cli_requires_archive_argument() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.assert().failure().stderr(predicate::str::contains("ARCHIVE_FILE"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a Facebook message archive"))
        .stdout(predicate::str::contains("Output directory"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fb-archive-export"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}
