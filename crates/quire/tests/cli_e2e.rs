#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn quire_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("quire"));
    cmd.env("QUIRE_DATA", data.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_document_lifecycle() {
    let data = TempDir::new().unwrap();

    // 1. Create an empty document
    quire_cmd(&data)
        .args(["create", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt has been created."));
    assert!(data.path().join("documents/notes.txt").is_file());
    assert!(data.path().join("history/notes.txt").is_dir());

    // 2. Two updates, one from a flag and one from stdin
    quire_cmd(&data)
        .args(["update", "notes.txt", "--content", "v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt has been updated."));
    quire_cmd(&data)
        .args(["update", "notes.txt"])
        .write_stdin("v2")
        .assert()
        .success();

    // 3. History holds the two earlier contents
    assert_eq!(
        fs::read(data.path().join("history/notes.txt/1_notes.txt")).unwrap(),
        b""
    );
    assert_eq!(
        fs::read(data.path().join("history/notes.txt/2_notes.txt")).unwrap(),
        b"v1"
    );
    quire_cmd(&data)
        .args(["view", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v2"));
    quire_cmd(&data)
        .args(["show", "notes.txt", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v1"));

    // 4. Rename carries history along
    quire_cmd(&data)
        .args(["rename", "notes.txt", "journal.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt renamed to journal.md"));
    assert!(!data.path().join("history/notes.txt").exists());
    assert!(data
        .path()
        .join("history/journal.md/2_journal.md")
        .is_file());

    // 5. Delete removes both sides
    quire_cmd(&data)
        .args(["delete", "journal.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal.md has been deleted."));
    assert!(!data.path().join("documents/journal.md").exists());
    assert!(!data.path().join("history/journal.md").exists());
}

#[test]
fn test_invalid_name_fails() {
    let data = TempDir::new().unwrap();

    quire_cmd(&data)
        .args(["create", "run.exe"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid name 'run.exe'"));
    assert!(!data.path().join("documents/run.exe").exists());

    quire_cmd(&data)
        .args(["create", ".txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A name is required"));
}

#[test]
fn test_duplicate_then_duplicate_again() {
    let data = TempDir::new().unwrap();

    quire_cmd(&data)
        .args(["create", "a.md", "--content", "# A"])
        .assert()
        .success();
    quire_cmd(&data)
        .args(["duplicate", "a.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A copy of a.md was created as a_copy.md."));
    assert_eq!(
        fs::read(data.path().join("documents/a_copy.md")).unwrap(),
        b"# A"
    );

    quire_cmd(&data)
        .args(["duplicate", "a.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_list_json_and_order() {
    let data = TempDir::new().unwrap();
    for name in ["b.txt", "a.txt", "c.md"] {
        quire_cmd(&data).args(["create", name]).assert().success();
    }

    let output = quire_cmd(&data)
        .args(["list", "--desc", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value["listed_documents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["c.md", "b.txt", "a.txt"]);
}

#[test]
fn test_view_renders_markdown() {
    let data = TempDir::new().unwrap();
    quire_cmd(&data)
        .args(["create", "about.md", "--content", "# Hello"])
        .assert()
        .success();

    quire_cmd(&data)
        .args(["view", "about.md", "--render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Hello</h1>"));
}

#[test]
fn test_restore_and_clear_history() {
    let data = TempDir::new().unwrap();
    quire_cmd(&data).args(["create", "a.txt"]).assert().success();
    quire_cmd(&data)
        .args(["update", "a.txt", "--content", "first"])
        .assert()
        .success();
    quire_cmd(&data)
        .args(["update", "a.txt", "--content", "second"])
        .assert()
        .success();

    quire_cmd(&data)
        .args(["restore", "a.txt", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restored to version 2"));
    assert_eq!(
        fs::read(data.path().join("documents/a.txt")).unwrap(),
        b"first"
    );

    quire_cmd(&data)
        .args(["clear-history", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 versions of a.txt."));

    quire_cmd(&data)
        .args(["show", "a.txt", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.txt has no version 1"));
}

#[test]
fn test_missing_document_fails() {
    let data = TempDir::new().unwrap();
    quire_cmd(&data)
        .args(["view", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document not found: ghost.txt"));
}
