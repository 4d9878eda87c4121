//! CLI integration tests for hanfix
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn hanfix() -> Command {
    Command::cargo_bin("hanfix").unwrap()
}

#[test]
fn test_help() {
    hanfix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CJK Unified Ideographs"));
}

#[test]
fn test_version() {
    hanfix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hanfix"));
}

#[test]
fn test_default_run_emits_valid_fixture() {
    let output = hanfix().assert().success().get_output().stdout.clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(doc["style_table"].as_array().unwrap().len(), 6);
    assert_eq!(doc["entries"].as_array().unwrap().len(), 20_992);
    assert_eq!(doc["entries"][0]["char"], "一");
}

#[test]
fn test_seed_is_reproducible() {
    let a = hanfix().args(["--seed", "42"]).assert().success().get_output().stdout.clone();
    let b = hanfix().args(["--seed", "42"]).assert().success().get_output().stdout.clone();
    assert_eq!(a, b);

    let c = hanfix().args(["--seed", "43"]).assert().success().get_output().stdout.clone();
    assert_ne!(a, c);
}

#[test]
fn test_output_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.json");

    hanfix()
        .args(["--seed", "1", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["entries"].as_array().unwrap().len(), 20_992);
}

#[test]
fn test_pretty_parses_to_same_document() {
    let compact = hanfix().args(["--seed", "9"]).assert().success().get_output().stdout.clone();
    let pretty = hanfix()
        .args(["--seed", "9", "--pretty"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let a: serde_json::Value = serde_json::from_slice(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_to_unwritable_path_fails() {
    hanfix()
        .args(["--output", "/nonexistent-dir/fixture.json"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}
