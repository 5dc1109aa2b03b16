//! Integration tests for the `rnarrate-cli` binary.
//!
//! Each test launches the binary via `assert_cmd`, writes any required
//! fixture files to a temp location, and asserts on exit code + output.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[allow(deprecated)]
fn rnarrate() -> Command {
    Command::cargo_bin("rnarrate-cli").expect("binary not found")
}

/// Write `contents` to a temporary file with the given suffix and return it.
fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const SCENARIO_A: &str = r#"[{
    "title": "Suspicious Login",
    "detection": {
        "selection": {"EventID": 1, "LogonType": 3},
        "condition": "selection"
    }
}]"#;

const RUNBOOK_DOC: &str = r#"[{
    "runbook": {"title": "Registry Tamper"},
    "title": "ignored",
    "detection": {"sel": {"TargetObject": "x"}, "condition": "sel"}
}]"#;

const LEGACY_DOC: &str = r#"[{
    "runbook": {"title": "Brute Force"},
    "detection_rule": {"rule": "EventID:4625 AND TargetUserName:admin"}
}]"#;

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_emits_template_payload() {
    let doc = temp_file(".json", SCENARIO_A);

    let output = rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["title"], "Suspicious Login");
    assert_eq!(payload["label"], "Acme");

    let template = payload["template"].as_str().unwrap();
    assert!(template.contains("{% assign log_entries = logs.log -%}"));
    assert!(template.contains(
        "Acme has detected Suspicious Login. As part of the investigation, Acme observed the following activity:"
    ));
    assert!(template.contains("`{{ log_entries[0].EventID }}`"));
    assert!(template.contains("`{{ log_entry.LogonType }}`"));
}

#[test]
fn generate_reads_stdin() {
    rnarrate()
        .args(["generate", "--label", "Acme"])
        .write_stdin(SCENARIO_A)
        .assert()
        .success()
        .stdout(predicate::str::contains("Suspicious Login"));
}

#[test]
fn generate_runbook_title_wins() {
    let doc = temp_file(".json", RUNBOOK_DOC);

    rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry Tamper"))
        .stdout(predicate::str::contains("has detected Registry Tamper."));
}

#[test]
fn generate_legacy_rule_string() {
    let doc = temp_file(".json", LEGACY_DOC);

    rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("EventID"))
        .stdout(predicate::str::contains("TargetUserName"));
}

#[test]
fn generate_expand_mode_has_no_placeholders() {
    let doc = temp_file(
        ".json",
        r#"{"title": "T", "EventID": 4624, "User": "admin"}"#,
    );

    let output = rnarrate()
        .args(["generate", "--label", "Acme", "--expand"])
        .arg(doc.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let narrative = payload["template"].as_str().unwrap();
    assert!(narrative.contains("* **EventID:** `4624`"));
    assert!(!narrative.contains("{{"));
    assert!(!narrative.contains("{%"));
}

#[test]
fn generate_invalid_document_fails_with_original_error() {
    let doc = temp_file(".json", "{definitely not: [json");

    rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading rule document"));
}

#[test]
fn generate_yaml_document() {
    let doc = temp_file(
        ".yml",
        "title: From YAML\ndetection:\n    sel:\n        CommandLine: whoami\n    condition: sel\n",
    );

    rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("From YAML"))
        .stdout(predicate::str::contains("CommandLine"));
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

#[test]
fn preview_renders_template_against_data() {
    let template = temp_file(".liquid", "Hello {{ logs.name }}!");
    let data = temp_file(".json", r#"{"logs": {"name": "Acme"}}"#);

    rnarrate()
        .args(["preview", "--template"])
        .arg(template.path())
        .arg("--data")
        .arg(data.path())
        .assert()
        .success()
        .stdout("Hello Acme!");
}

#[test]
fn preview_reports_render_error() {
    let template = temp_file(".liquid", "{% if broken");
    let data = temp_file(".json", "{}");

    rnarrate()
        .args(["preview", "--template"])
        .arg(template.path())
        .arg("--data")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render error"));
}

// ---------------------------------------------------------------------------
// save / load / list
// ---------------------------------------------------------------------------

#[test]
fn save_load_list_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    rnarrate()
        .args(["save", "--name", "incident", "--dir", dir_arg])
        .write_stdin("{{ x }}")
        .assert()
        .success()
        .stdout(predicate::str::contains("incident.liquid"));

    rnarrate()
        .args(["load", "--name", "incident", "--dir", dir_arg])
        .assert()
        .success()
        .stdout("{{ x }}");

    rnarrate()
        .args(["list", "--dir", dir_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("incident.liquid"));
}

#[test]
fn save_overwrites_existing_name() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    rnarrate()
        .args(["save", "--name", "t", "--dir", dir_arg])
        .write_stdin("first")
        .assert()
        .success();

    rnarrate()
        .args(["save", "--name", "t", "--dir", dir_arg])
        .write_stdin("second")
        .assert()
        .success();

    rnarrate()
        .args(["load", "--name", "t", "--dir", dir_arg])
        .assert()
        .success()
        .stdout("second");
}

#[test]
fn load_missing_template_fails() {
    let dir = tempfile::tempdir().unwrap();

    rnarrate()
        .args(["load", "--name", "missing", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("template not found"));
}

// ---------------------------------------------------------------------------
// generate → preview pipeline
// ---------------------------------------------------------------------------

#[test]
fn generated_template_previews_end_to_end() {
    let doc = temp_file(".json", SCENARIO_A);

    let output = rnarrate()
        .args(["generate", "--label", "Acme"])
        .arg(doc.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let template = temp_file(".liquid", payload["template"].as_str().unwrap());
    let data = temp_file(
        ".json",
        r#"{"logs": {"log": [{"EventID": 4624, "LogonType": 3}]}}"#,
    );

    rnarrate()
        .args(["preview", "--template"])
        .arg(template.path())
        .arg("--data")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("* **EventID:** `4624`"))
        .stdout(predicate::str::contains("observed the following activity:"));
}
