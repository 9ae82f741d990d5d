//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway home
//! directory so the real store is never touched.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with state rooted under `home` and return output.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    // Keep cargo's own registry where it was before HOME is redirected.
    let cargo_home = std::env::var("CARGO_HOME").unwrap_or_else(|_| {
        format!("{}/.cargo", std::env::var("HOME").unwrap_or_default())
    });
    let output = Command::new("cargo")
        .args(["run", "-p", "habitloop-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("CARGO_HOME", cargo_home)
        .env("HABITLOOP_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_day_status() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["day", "status"]);
    assert_eq!(code, 0, "Day status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["day"]["points"], 0);
    assert_eq!(parsed["streak"], 0);
}

#[test]
fn test_track_steps_persists() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["track", "steps", "2500"]);
    assert_eq!(code, 0, "Track steps failed");

    let (stdout, _, code) = run_cli(home.path(), &["day", "status"]);
    assert_eq!(code, 0, "Day status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["day"]["steps"], 2500);
}

#[test]
fn test_award_updates_board() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["board", "team", "Alpha"]);
    assert_eq!(code, 0, "Board team failed");

    let (_, _, code) = run_cli(home.path(), &["award", "7"]);
    assert_eq!(code, 0, "Award failed");

    let (stdout, _, code) = run_cli(home.path(), &["board", "show"]);
    assert_eq!(code, 0, "Board show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let standings = parsed.as_array().unwrap();
    assert!(standings
        .iter()
        .any(|row| row["team"] == "Alpha" && row["points"] == 7));
}

#[test]
fn test_challenge_complete_is_one_way() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["challenge", "complete"]);
    assert_eq!(code, 0, "Challenge complete failed");
    let first: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(first["type"], "challenge_completed");

    let (stdout, _, code) = run_cli(home.path(), &["challenge", "complete"]);
    assert_eq!(code, 0, "Repeat challenge complete failed");
    let second: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(second["type"], "noop");
}

#[test]
fn test_day_commit_resets_metrics() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["track", "water", "500"]);
    assert_eq!(code, 0, "Track water failed");

    let (_, _, code) = run_cli(home.path(), &["day", "commit"]);
    assert_eq!(code, 0, "Day commit failed");

    let (stdout, _, code) = run_cli(home.path(), &["day", "status"]);
    assert_eq!(code, 0, "Day status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["day"]["water_ml"], 0);
}

#[test]
fn test_focus_status() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["focus", "status"]);
    assert_eq!(code, 0, "Focus status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["running"], false);
}

#[test]
fn test_focus_stop_without_start_is_noop() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["focus", "stop"]);
    assert_eq!(code, 0, "Focus stop failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["type"], "noop");
}

#[test]
fn test_focus_noop_still_persists_state() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["focus", "stop"]);
    assert_eq!(code, 0, "Focus stop failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["type"], "noop");

    // The no-op branch still writes the loaded (possibly rolled-over)
    // state back to the store.
    let db_path = home
        .path()
        .join(".config")
        .join("habitloop-dev")
        .join("habitloop.db");
    let db = habitloop_core::Database::open_at(&db_path).unwrap();
    assert!(db
        .kv_get(habitloop_core::storage::state::keys::TODAY)
        .unwrap()
        .is_some());
}

#[test]
fn test_goals_show() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["goals", "show"]);
    assert_eq!(code, 0, "Goals show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["steps"], 8000);
    assert_eq!(parsed["water_ml"], 1500);
}

#[test]
fn test_goals_set_partial() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["goals", "set", "--steps", "12000"]);
    assert_eq!(code, 0, "Goals set failed");

    let (stdout, _, code) = run_cli(home.path(), &["goals", "show"]);
    assert_eq!(code, 0, "Goals show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["steps"], 12000);
    assert_eq!(parsed["water_ml"], 1500);
}

#[test]
fn test_stats_streak() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "streak"]);
    assert_eq!(code, 0, "Stats streak failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["streak"], 0);
}

#[test]
fn test_stats_history_empty() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "history"]);
    assert_eq!(code, 0, "Stats history failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_idea() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["idea"]);
    assert_eq!(code, 0, "Idea failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["idea"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_notes_roundtrip() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["notes", "set", "drink water at noon"]);
    assert_eq!(code, 0, "Notes set failed");

    let (stdout, _, code) = run_cli(home.path(), &["notes", "show"]);
    assert_eq!(code, 0, "Notes show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["notes"], "drink water at noon");
}

#[test]
fn test_config_get() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "history_days"]);
    assert_eq!(code, 0, "Config get failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["value"], "7");
}

#[test]
fn test_config_set() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "history_days", "14"]);
    assert_eq!(code, 0, "Config set failed");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "history_days"]);
    assert_eq!(code, 0, "Config get failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["value"], "14");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "nope", "1"]);
    assert_ne!(code, 0, "Unknown config key should fail");
    assert!(stderr.contains("error:"));
}
