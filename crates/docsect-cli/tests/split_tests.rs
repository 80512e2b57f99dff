//! Integration tests for the split command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docsect_cmd() -> Command {
    Command::cargo_bin("docsect").unwrap()
}

#[test]
fn test_split_markdown_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("guide.md");
    fs::write(&file, "# Intro\nwelcome\n# Usage\nrun it").unwrap();

    docsect_cmd()
        .arg("split")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("guide - Section 1"))
        .stdout(predicate::str::contains("guide - Section 2"))
        .stdout(predicate::str::contains("welcome"));
}

#[test]
fn test_split_titles_only() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("guide.md");
    fs::write(&file, "# Intro\nwelcome\n# Usage\nrun it").unwrap();

    docsect_cmd()
        .arg("split")
        .arg(&file)
        .arg("--titles-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("guide - Section 1"))
        .stdout(predicate::str::contains("welcome").not());
}

#[test]
fn test_split_json_format() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "first paragraph\n\nsecond paragraph").unwrap();

    let output = docsect_cmd()
        .arg("split")
        .arg(&file)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["title"], "notes - Section 1");
    assert_eq!(parsed[1]["content"], "second paragraph");
}

#[test]
fn test_split_missing_file_exit_code() {
    docsect_cmd()
        .arg("split")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_scan_directory_counts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.md"), "# One\nx\n# Two\ny").unwrap();
    fs::write(dir.path().join("b.txt"), "solo paragraph").unwrap();
    fs::write(dir.path().join("ignored.rs"), "fn main() {}").unwrap();

    docsect_cmd()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md: 2 sections"))
        .stdout(predicate::str::contains("b.txt: 1 sections"))
        .stdout(predicate::str::contains("ignored.rs").not());
}

#[test]
fn test_scan_missing_directory_exit_code() {
    docsect_cmd()
        .arg("scan")
        .arg("no-such-dir")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_scan_full_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.md"), "# One\nbody text").unwrap();

    docsect_cmd()
        .arg("scan")
        .arg(dir.path())
        .arg("--full")
        .assert()
        .success()
        .stdout(predicate::str::contains("a - Section 1"))
        .stdout(predicate::str::contains("body text"));
}
