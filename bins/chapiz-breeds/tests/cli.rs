//! End-to-end tests for the chapiz-breeds binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A command isolated from the user's config and recent selections
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chapiz-breeds").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--storage-dir")
        .arg(dir.path().join("recent"));
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["candidate"]["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("suggest"))
        .stdout(predicate::str::contains("recent"));
}

#[test]
fn test_score_substring() {
    let dir = TempDir::new().unwrap();
    let value = json_output(cmd(&dir).args(["score", "retriever", "Golden Retriever"]));

    assert_eq!(value["score"], 63);
    assert_eq!(value["kind"], "substring");
    assert_eq!(value["matchedIndices"].as_array().unwrap().len(), 9);
}

#[test]
fn test_score_no_match_text() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["score", "xyz", "Bengal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn test_rank_prefix_first() {
    let dir = TempDir::new().unwrap();
    let value = json_output(cmd(&dir).args(["rank", "pers"]));

    let ids = ids(&value);
    assert_eq!(ids[0], "persian");
    assert_eq!(value[0]["score"], 90);
    assert_eq!(value[0]["highlightedName"], "<mark>P</mark><mark>e</mark><mark>r</mark><mark>s</mark>ian");
}

#[test]
fn test_rank_no_match() {
    let dir = TempDir::new().unwrap();
    let value = json_output(cmd(&dir).args(["rank", "xyz123nomatch"]));
    assert!(value.as_array().unwrap().is_empty());

    cmd(&dir)
        .args(["rank", "xyz123nomatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No breeds match"));
}

#[test]
fn test_rank_limit_and_field() {
    let dir = TempDir::new().unwrap();
    let value = json_output(cmd(&dir).args(["rank", "united", "--field", "origin", "--limit", "2"]));

    let matches = value.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m["field"] == "origin"));
    assert!(matches.iter().all(|m| m["candidate"]["origin"] == "United States"));
}

#[test]
fn test_recent_add_and_browse() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).args(["recent", "add", "siamese"]).assert().success();
    cmd(&dir).args(["recent", "add", "bengal"]).assert().success();

    let recent = json_output(cmd(&dir).args(["recent", "list"]));
    assert_eq!(recent[0]["id"], "bengal");
    assert_eq!(recent[1]["id"], "siamese");
    assert_eq!(recent[1]["name"], "Siamese");

    let value = json_output(cmd(&dir).args(["suggest", "--limit", "4"]));
    let ids = ids(&value);
    assert_eq!(ids.len(), 4);
    assert_eq!(&ids[..2], ["bengal", "siamese"]);
    assert_eq!(value[0]["score"], 100);
    assert_eq!(value[2]["score"], 0);
}

#[test]
fn test_suggest_boosts_recent() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["recent", "add", "burmese"]).assert().success();

    let boosted = json_output(cmd(&dir).args(["suggest", "b"]));
    assert_eq!(ids(&boosted)[0], "burmese");
    assert_eq!(boosted[0]["score"], 105);

    let plain = json_output(cmd(&dir).args(["suggest", "b", "--no-recent"]));
    assert_eq!(plain[0]["score"], 90);
}

#[test]
fn test_recent_namespaces_are_separate() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["recent", "add", "persian"]).assert().success();

    let other = json_output(cmd(&dir).args(["recent", "list", "--namespace", "recent-dog-breeds"]));
    assert!(other.as_array().unwrap().is_empty());
}

#[test]
fn test_recent_clear() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["recent", "add", "persian"]).assert().success();
    cmd(&dir).args(["recent", "clear"]).assert().success();

    let recent = json_output(cmd(&dir).args(["recent", "list"]));
    assert!(recent.as_array().unwrap().is_empty());
}

#[test]
fn test_recent_add_unknown_breed() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["recent", "add", "dragon"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown candidate: dragon"));
}

#[test]
fn test_custom_breed_file() {
    let dir = TempDir::new().unwrap();
    let breeds = dir.path().join("dogs.json");
    std::fs::write(
        &breeds,
        r#"[{"id": "a", "name": "Labrador"}, {"id": "b", "name": "Poodle"}]"#,
    )
    .unwrap();

    let value = json_output(cmd(&dir).arg("--breeds").arg(&breeds).args(["rank", "poo"]));
    assert_eq!(ids(&value), ["b"]);
}

#[test]
fn test_invalid_breed_file() {
    let dir = TempDir::new().unwrap();
    let breeds = dir.path().join("broken.json");
    std::fs::write(&breeds, "{not json").unwrap();

    cmd(&dir)
        .arg("--breeds")
        .arg(&breeds)
        .args(["rank", "a"])
        .assert()
        .code(4);
}

#[test]
fn test_config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".chapiz.toml"),
        "[search]\nlimit = 1\n\n[highlight]\nopen = \"[\"\nclose = \"]\"\n",
    )
    .unwrap();

    let value = json_output(cmd(&dir).args(["rank", "siam"]));
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["highlightedName"], "[S][i][a][m]ese");
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chapiz.toml"), "[search]\nlimit = 0\n").unwrap();

    cmd(&dir)
        .args(["rank", "a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("search.limit"));
}

#[test]
fn test_config_command_shows_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace = \"recent-cat-breeds\""))
        .stdout(predicate::str::contains("debounce_ms = 300"));
}

#[test]
fn test_interactive_collapses_fast_input() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["interactive", "--format", "json"])
        .write_stdin("p\npe\npers\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["query"], "pers");
    assert_eq!(lines[0]["matches"][0]["candidate"]["id"], "persian");
}

#[test]
fn test_interactive_uses_configured_debounce() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".chapiz.toml"), "[input]\ndebounce_ms = 0\n").unwrap();

    let output = cmd(&dir)
        .args(["interactive", "--format", "json", "--limit", "1"])
        .write_stdin("p\nsiam\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    // Without a quiet interval every line is answered.
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["query"], "p");
    assert_eq!(lines[1]["query"], "siam");
    assert_eq!(lines[1]["matches"][0]["candidate"]["id"], "siamese");
}

#[test]
fn test_stats_reported_when_loading_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chapiz.toml"), "[search]\nlimit = 0\n").unwrap();

    cmd(&dir)
        .args(["rank", "a", "--stats"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"counters\""));
}

#[test]
fn test_stats_after_score() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["score", "bengal", "Bengal", "--stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"session_id\""));
}
