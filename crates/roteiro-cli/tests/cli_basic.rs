//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against the fixture catalogs with a fixed
//! reference instant, and point HOME at a temporary directory so the user's
//! config is never touched.

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &tempfile::TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_roteiro"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("ROTEIRO_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_venue_status_all() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, stdout, stderr) = run_cli(
        &home,
        &["venue", "status", "--catalog", &catalog, "--at", "2024-05-10T21:00"],
    );
    assert_eq!(code, 0, "venue status failed: {stderr}");
    assert!(stdout.contains("Bar do Zé: Aberto agora · fecha às 02h"));
    assert!(stdout.contains("Cine Roma: Fechado agora · abre amanhã às 14h"));
}

#[test]
fn test_venue_status_after_midnight_json() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, stdout, stderr) = run_cli(
        &home,
        &[
            "venue", "status", "bar-do-ze", "--catalog", &catalog, "--at", "2024-05-11T00:30",
            "--json",
        ],
    );
    assert_eq!(code, 0, "venue status failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let row = &parsed[0];
    assert_eq!(row["open"], true);
    assert_eq!(row["active_interval"]["day"], "friday");
    assert_eq!(row["active_interval"]["open"], "18:00");
    assert_eq!(row["closes_at"], "2024-05-11T02:00:00");
}

#[test]
fn test_venue_hours() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, stdout, stderr) =
        run_cli(&home, &["venue", "hours", "bar-do-ze", "--catalog", &catalog]);
    assert_eq!(code, 0, "venue hours failed: {stderr}");
    assert!(stdout.contains("sábado"));
    assert!(stdout.contains("12h às 15h, 18h às 02h"));
    assert!(stdout.contains("Fechado"));
}

#[test]
fn test_malformed_hours_fail_loudly() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("broken_catalog.json");
    let (code, stdout, stderr) = run_cli(
        &home,
        &["venue", "status", "--catalog", &catalog, "--at", "2024-05-10T21:00"],
    );
    assert_eq!(code, 1);
    assert!(!stdout.contains("Fechado"));
    assert!(stderr.contains("25:99"), "stderr was: {stderr}");
    assert!(stderr.contains("friday"), "stderr was: {stderr}");
}

#[test]
fn test_event_status_labels() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, stdout, stderr) = run_cli(
        &home,
        &["event", "status", "--catalog", &catalog, "--at", "2024-05-10T21:00"],
    );
    assert_eq!(code, 0, "event status failed: {stderr}");
    assert!(stdout.contains("Forró de Sexta: Agora, até 00h"));
    assert!(stdout.contains("Matinê: Amanhã, às 15h"));
    assert!(stdout.contains("Festival de Inverno: 20/07, às 10h"));
}

#[test]
fn test_event_status_json() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, stdout, stderr) = run_cli(
        &home,
        &[
            "event", "status", "matine", "--catalog", &catalog, "--at", "2024-05-11T09:00",
            "--json",
        ],
    );
    assert_eq!(code, 0, "event status failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["label"]["kind"], "today");
    assert_eq!(parsed[0]["label"]["start_hour"], "15");
}

#[test]
fn test_invalid_event_fails_loudly() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("broken_catalog.json");
    let (code, _stdout, stderr) = run_cli(
        &home,
        &["event", "status", "sem-data", "--catalog", &catalog, "--at", "2024-05-10T21:00"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("no start date"), "stderr was: {stderr}");
}

#[test]
fn test_unknown_venue() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");
    let (code, _stdout, stderr) = run_cli(
        &home,
        &["venue", "status", "nenhum", "--catalog", &catalog, "--at", "2024-05-10T21:00"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("nenhum"));
}

#[test]
fn test_config_fixed_now_drives_status() {
    let home = tempfile::tempdir().unwrap();
    let catalog = fixture("catalog.json");

    let (code, _, stderr) = run_cli(&home, &["config", "set", "clock.fixed_now", "2024-05-12T15:00"]);
    assert_eq!(code, 0, "config set failed: {stderr}");

    let (code, stdout, _) = run_cli(&home, &["config", "get", "clock.fixed_now"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "2024-05-12T15:00");

    // Sunday 15:00: Cine Roma is open
    let (code, stdout, stderr) =
        run_cli(&home, &["venue", "status", "cine-roma", "--catalog", &catalog]);
    assert_eq!(code, 0, "venue status failed: {stderr}");
    assert!(stdout.contains("Cine Roma: Aberto agora · fecha às 22h"));

    let (code, _, _) = run_cli(&home, &["config", "set", "clock.fixed_now", "sempre"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "get", "display.colour"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}
