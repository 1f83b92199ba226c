//! End-to-end tests for the headless subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn smorg() -> Command {
    Command::cargo_bin("smorg").unwrap()
}

#[test]
fn catalog_lists_builtin_items() {
    smorg()
        .args(["catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pa-oneonones"))
        .stdout(predicate::str::contains("Campus Walks & One-on-Ones"))
        .stdout(predicate::str::is_match(r"(?m)^27 of 27 items$").unwrap());
}

#[test]
fn catalog_query_narrows_results() {
    let output = smorg()
        .args(["catalog", "--query", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hallway Coffee Drop-ins"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let summary = text.lines().last().unwrap();
    assert!(summary.ends_with("of 27 items"));
    assert!(!summary.starts_with("27 "));
}

#[test]
fn catalog_cadence_filter_as_json() {
    let output = smorg()
        .args(["catalog", "--cadence", "monthly", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert!(!items.is_empty());
    for item in &items {
        assert_eq!(item["cadence"], "monthly");
    }
}

#[test]
fn catalog_filters_combine() {
    let output = smorg()
        .args(["catalog", "--cadence", "semester", "--kind", "hospitality", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(items.len(), 4);
    for item in &items {
        assert_eq!(item["cadence"], "semester");
        assert_eq!(item["kind"], "hospitality");
    }
}

#[test]
fn catalog_rejects_unknown_cadence() {
    smorg()
        .args(["catalog", "--cadence", "fortnightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnightly"));
}

#[test]
fn catalog_accepts_replacement_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "contributors": [],
            "items": [{
                "id": "x-1",
                "contributor": "someone",
                "title": "Single Thing",
                "description": "Just one.",
                "cadence": "daily",
                "activity": "practice",
                "kind": "prayer"
            }]
        }"#,
    )
    .unwrap();

    smorg()
        .args(["catalog", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Single Thing"))
        .stdout(predicate::str::contains("1 of 1 items"));
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "contributors": [],
            "items": [
                {"id": "x-1", "contributor": "a", "title": "A", "description": "",
                 "cadence": "daily", "activity": "practice", "kind": "prayer"},
                {"id": "x-1", "contributor": "a", "title": "B", "description": "",
                 "cadence": "daily", "activity": "practice", "kind": "prayer"}
            ]
        }"#,
    )
    .unwrap();

    smorg()
        .args(["catalog", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("x-1"));
}

#[test]
fn schema_prints_catalog_schema() {
    let output = smorg()
        .args(["schema"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let text = schema.to_string();
    assert!(text.contains("contributors"));
    assert!(text.contains("items"));
}

#[test]
fn export_stdout_renders_empty_session_with_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(&session, "{}").unwrap();

    smorg()
        .args(["export", "--stdout"])
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Smorgasbord Plan"))
        .stdout(predicate::str::contains("Not provided"))
        .stdout(predicate::str::contains("(No items)"));
}

#[test]
fn export_stdout_lists_plan_entries_under_their_cadence() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(
        &session,
        r#"{
            "check_in": {"enthusiasm": "High hopes"},
            "plan": {
                "monthly": [{
                    "id": "0e4f9a52-6b4b-4f10-93dd-0d8e5b1c2a77",
                    "source_id": "ha-welcomecoffee",
                    "title": "Welcome Coffee for New Faculty",
                    "description": "Greet newcomers over coffee.",
                    "activity": "gathering",
                    "kind": "hospitality"
                }]
            },
            "vps": {"vision": "Slow hospitality"}
        }"#,
    )
    .unwrap();

    smorg()
        .args(["export", "--stdout"])
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("High hopes"))
        .stdout(predicate::str::contains("Welcome Coffee for New Faculty"))
        .stdout(predicate::str::contains("Slow hospitality"))
        .stdout(predicate::str::contains("Daily:\n  (No items)"));
}

#[test]
fn export_writes_html_document() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    let out = dir.path().join("plan.doc");
    fs::write(&session, "{}").unwrap();

    smorg()
        .args(["export", "--out"])
        .arg(&out)
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<html>"));
    assert!(html.contains("Smorgasbord Plan"));
    assert!(!html.contains("window.print"));
}

#[test]
fn export_title_override() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(&session, "{}").unwrap();

    smorg()
        .args(["export", "--stdout", "--title", "Autumn Cohort"])
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Autumn Cohort"));
}

#[test]
fn export_missing_session_fails() {
    smorg()
        .args(["export", "--stdout", "no-such-session.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-session.json"));
}

#[test]
fn export_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    let config = dir.path().join("smorg.yaml");
    fs::write(&session, "{}").unwrap();
    fs::write(&config, "export:\n  title: Configured Title\n").unwrap();

    smorg()
        .args(["export", "--stdout", "--config"])
        .arg(&config)
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configured Title"));
}
