//! Integration tests for the Folio CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a small two-chapter book JSON for testing
fn create_test_book(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let book = serde_json::json!({
        "title": "Test Book",
        "author": "A. Author",
        "chapters": [
            { "title": "First Chapter", "content": "Opening line.\n\nSecond paragraph." },
            { "title": "Last Chapter", "content": "Closing line." }
        ]
    });
    let path = dir.path().join(name);
    fs::write(&path, book.to_string()).expect("Failed to write test book");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("toc"))
        .stdout(predicate::str::contains("read"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_info() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", book.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Book"))
        .stdout(predicate::str::contains("A. Author"))
        .stdout(predicate::str::contains("Chapters: 2"));
}

#[test]
fn test_info_json() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", book.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chapters\": 2"));
}

#[test]
fn test_verbose_info_logs_the_parsed_book() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", book.to_str().unwrap(), "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed book"));
}

#[test]
fn test_info_missing_file() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", "no-such-book.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-book.json"));
}

#[test]
fn test_toc() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["toc", book.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. First Chapter"))
        .stdout(predicate::str::contains("2. Last Chapter"));
}

#[test]
fn test_read_prints_paragraphs_and_progress() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");
    let state_dir = temp_dir.path().join("state");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args([
        "read",
        book.to_str().unwrap(),
        "--state-dir",
        state_dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("## First Chapter"))
    .stdout(predicate::str::contains("Opening line."))
    .stdout(predicate::str::contains("Second paragraph."))
    .stdout(predicate::str::contains("[50%]"));
}

#[test]
fn test_read_resumes_from_saved_position() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");
    let state_dir = temp_dir.path().join("state");

    // First invocation jumps to the last chapter and persists it
    Command::cargo_bin("folio-cli")
        .unwrap()
        .args([
            "read",
            book.to_str().unwrap(),
            "--chapter",
            "1",
            "--state-dir",
            state_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Last Chapter"))
        .stdout(predicate::str::contains("[100%]"));

    // Second invocation resumes there without --chapter
    Command::cargo_bin("folio-cli")
        .unwrap()
        .args([
            "read",
            book.to_str().unwrap(),
            "--state-dir",
            state_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Last Chapter"));
}

#[test]
fn test_read_rejects_out_of_range_chapter() {
    let temp_dir = TempDir::new().unwrap();
    let book = create_test_book(&temp_dir, "book.json");
    let state_dir = temp_dir.path().join("state");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args([
        "read",
        book.to_str().unwrap(),
        "--chapter",
        "9",
        "--state-dir",
        state_dir.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("out of range"));
}
