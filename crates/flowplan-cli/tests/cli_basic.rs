//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_flowplan-cli"))
        .env("FLOWPLAN_HOME", home)
        .env_remove("FLOWPLAN_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed {:?}: {}", args, stderr);
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_block_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["block", "add", "Deep work", "--start", "09:00", "--end", "11:00", "--priority", "high"],
    );
    assert!(out.contains("Block created:"));

    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    let blocks = list.as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["title"], "Deep work");
    assert_eq!(blocks[0]["start_minute"], 540);
    assert_eq!(blocks[0]["end_minute"], 660);
    assert_eq!(blocks[0]["priority"], "HIGH");
    assert_eq!(blocks[0]["icon"], "Calendar");
}

#[test]
fn test_block_add_defaults_to_one_hour() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["block", "add", "Lunch", "--start", "12:00"]);
    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    assert_eq!(list[0]["end_minute"], 780);
    assert_eq!(list[0]["priority"], "MEDIUM");
}

#[test]
fn test_block_add_rejects_bad_input() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["block", "add", "Oops", "--start", "25:00"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));

    let (_, _, code) = run_cli(home.path(), &["block", "add", "   ", "--start", "08:00"]);
    assert_ne!(code, 0);

    let (_, _, code) = run_cli(home.path(), &["block", "add", "X", "--priority", "urgent"]);
    assert_ne!(code, 0);
}

#[test]
fn test_block_remove() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["block", "add", "Gym", "--start", "07:00"]);
    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    let id = list[0]["id"].as_str().unwrap().to_string();

    let out = run_cli_success(home.path(), &["block", "remove", &id]);
    assert!(out.contains("Block removed"));
    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    assert!(list.as_array().unwrap().is_empty());

    let (_, _, code) = run_cli(home.path(), &["block", "remove", &id]);
    assert_ne!(code, 0);
}

#[test]
fn test_layout_show_json() {
    let home = tempfile::tempdir().unwrap();
    for (title, start, end) in [
        ("Standup", "09:00", "10:00"),
        ("Review", "09:30", "10:30"),
        ("Sync", "10:15", "11:00"),
    ] {
        run_cli_success(home.path(), &["block", "add", title, "--start", start, "--end", end]);
    }

    let placed = parse_json(&run_cli_success(home.path(), &["layout", "show", "--json"]));
    let placed = placed.as_array().unwrap();
    assert_eq!(placed.len(), 3);
    let columns: Vec<_> = placed.iter().map(|p| p["column"].as_u64().unwrap()).collect();
    assert_eq!(columns, vec![0, 1, 0]);
    for p in placed {
        assert_eq!(p["total_columns"], 2);
        assert_eq!(p["cluster"], 0);
        assert_eq!(p["geometry"]["width_percent"], 50.0);
    }
    // Default scale is 70px per hour
    assert_eq!(placed[0]["geometry"]["height_px"], 70.0);
}

#[test]
fn test_layout_respects_touching_config() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["block", "add", "Wake", "--start", "07:00", "--end", "08:00"]);
    run_cli_success(home.path(), &["block", "add", "Commute", "--start", "08:00", "--end", "09:00"]);

    let placed = parse_json(&run_cli_success(home.path(), &["layout", "show", "--json"]));
    assert!(placed.as_array().unwrap().iter().all(|p| p["total_columns"] == 1));

    run_cli_success(home.path(), &["config", "set", "planner.touching_blocks_conflict", "true"]);
    let placed = parse_json(&run_cli_success(home.path(), &["layout", "show", "--json"]));
    assert!(placed.as_array().unwrap().iter().all(|p| p["total_columns"] == 2));
}

#[test]
fn test_layout_show_text_and_slots() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["block", "add", "Read", "--start", "21:15", "--end", "22:00"]);

    let out = run_cli_success(home.path(), &["layout", "show"]);
    assert!(out.contains("1 block(s), 1 cluster(s)"));
    assert!(out.contains("21:15 - 22:00"));

    let slots = run_cli_success(home.path(), &["layout", "slots"]);
    assert_eq!(slots.lines().count(), 24);
    assert!(slots.contains("21:00 | Read (21:15 - 22:00) [MEDIUM]"));
    assert!(slots.contains("09:00 |"));
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "planner.pixels_per_hour"]).trim(),
        "70"
    );
    run_cli_success(home.path(), &["config", "set", "planner.pixels_per_hour", "120"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "planner.pixels_per_hour"]).trim(),
        "120"
    );

    let (_, _, code) = run_cli(home.path(), &["config", "get", "planner.nope"]);
    assert_ne!(code, 0);
    let (_, _, code) = run_cli(home.path(), &["config", "set", "ui.dark_mode", "maybe"]);
    assert_ne!(code, 0);

    let out = run_cli_success(home.path(), &["config", "list"]);
    assert!(out.lines().any(|l| l == "planner.pixels_per_hour = 120"));

    let out = run_cli_success(home.path(), &["config", "reset"]);
    assert!(out.contains("70 px/hour"));
    let list = parse_json(&run_cli_success(home.path(), &["config", "list", "--json"]));
    assert_eq!(list["planner"]["pixels_per_hour"], 70);
}

#[test]
fn test_config_set_rejects_out_of_range_planner_values() {
    let home = tempfile::tempdir().unwrap();
    for (key, value) in [
        ("planner.default_block_minutes", "0"),
        ("planner.default_block_minutes", "1500"),
        ("planner.default_block_minutes", "4294967295"),
        ("planner.pixels_per_hour", "0"),
        ("planner.default_start", "noon"),
    ] {
        let (_, stderr, code) = run_cli(home.path(), &["config", "set", key, value]);
        assert_ne!(code, 0, "{key} = {value} was accepted");
        assert!(stderr.contains("error:"));
    }
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "planner.default_block_minutes"]).trim(),
        "60"
    );
}

#[test]
fn test_block_add_uses_configured_length() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "planner.default_block_minutes", "1440"]);
    run_cli_success(home.path(), &["block", "add", "All day", "--start", "09:00"]);

    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    assert_eq!(list[0]["start_minute"], 540);
    // A full day wraps back onto the start
    assert_eq!(list[0]["end_minute"], 540);
}

#[test]
fn test_block_add_rejects_hand_edited_length() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "[planner]\ndefault_block_minutes = 4294967295\n",
    )
    .unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["block", "add", "Huge", "--start", "09:00"]);
    assert_eq!(code, 1, "expected a clean error exit: {stderr}");
    assert!(stderr.contains("default_block_minutes"));
    let list = parse_json(&run_cli_success(home.path(), &["block", "list", "--json"]));
    assert!(list.as_array().unwrap().is_empty());
}
