#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use gut_core::export::parse_csv;
use gut_core::{ActionId, Locale, Tier};

fn gut(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gut").unwrap();
    cmd.current_dir(dir.path()).env_remove("GUT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn exported_ids(stdout: &[u8], locale: Locale) -> Vec<ActionId> {
    parse_csv(stdout, locale).unwrap().iter().map(|r| r.id).collect()
}

// ---------------------------------------------------------------------------
// gut rank
// ---------------------------------------------------------------------------

#[test]
fn rank_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    let with = gut(&dir).arg("rank").output().unwrap();
    let without = gut(&dir).output().unwrap();
    assert!(with.status.success());
    assert_eq!(with.stdout, without.stdout);
}

#[test]
fn rank_prints_english_headers() {
    let dir = TempDir::new().unwrap();
    gut(&dir)
        .arg("rank")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id"))
        .stdout(predicate::str::contains("priority"))
        .stdout(predicate::str::contains("High"));
}

#[test]
fn rank_json_lists_rows_in_priority_order() {
    let dir = TempDir::new().unwrap();
    let output = gut(&dir).args(["rank", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let priorities: Vec<u64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["priority"].as_u64().unwrap())
        .collect();
    assert_eq!(priorities.len(), 12);
    assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(rows[0]["tier"], "High");
}

#[test]
fn rank_ends_with_tier_summary() {
    let dir = TempDir::new().unwrap();
    let output = gut(&dir).args(["rank", "--set", "12=5,5,5"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some("High: 10  Medium: 1  Low: 1"));
}

#[test]
fn unknown_action_fails() {
    let dir = TempDir::new().unwrap();
    gut(&dir)
        .args(["rank", "--set", "13=5,5,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action id: 13"));
}

#[test]
fn malformed_edit_is_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    gut(&dir).args(["rank", "--set", "12=5,5"]).assert().failure();
}

// ---------------------------------------------------------------------------
// gut export
// ---------------------------------------------------------------------------

#[test]
fn edit_moves_action_twelve_above_action_six() {
    let dir = TempDir::new().unwrap();

    let before = gut(&dir).args(["export", "--stdout"]).output().unwrap();
    let ids = exported_ids(&before.stdout, Locale::English);
    let pos = |ids: &[ActionId], id: u32| ids.iter().position(|i| *i == ActionId(id)).unwrap();
    assert!(pos(&ids, 6) < pos(&ids, 12));

    let after = gut(&dir)
        .args(["export", "--stdout", "--set", "12=5,5,5"])
        .output()
        .unwrap();
    let rows = parse_csv(&after.stdout, Locale::English).unwrap();
    assert_eq!(rows[0].id, ActionId(12));
    assert_eq!(rows[0].priority.value(), 125);
    assert_eq!(rows[0].tier, Tier::High);
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert!(pos(&ids, 12) < pos(&ids, 6));
}

#[test]
fn export_writes_default_file_name() {
    let dir = TempDir::new().unwrap();
    gut(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 12 actions"));

    let path = dir.path().join("matriz_gut_prioridades.csv");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"id,label,gravity,urgency,trend,priority,tier\n"));
    assert_eq!(parse_csv(&bytes, Locale::English).unwrap().len(), 12);
}

#[test]
fn export_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let first = gut(&dir).args(["export", "--stdout", "--set", "3:t=1"]).output().unwrap();
    let second = gut(&dir).args(["export", "--stdout", "--set", "3:t=1"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn out_of_range_edit_is_clamped() {
    let dir = TempDir::new().unwrap();
    let output = gut(&dir)
        .args(["export", "--stdout", "--set", "12=9,9,9"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows = parse_csv(&output.stdout, Locale::English).unwrap();
    assert_eq!(rows[0].id, ActionId(12));
    assert_eq!(rows[0].scores(), gut_core::GutScores::from_values(5, 5, 5));
}

#[test]
fn export_with_portuguese_settings_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gut.json");
    std::fs::write(&config, r#"{"locale":"pt-BR","export_file_name":"saida.csv"}"#).unwrap();

    gut(&dir)
        .args(["export", "--config"])
        .arg(&config)
        .assert()
        .success();

    let bytes = std::fs::read(dir.path().join("saida.csv")).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.starts_with("Nº,Ação Proposta,G,U,T,Prioridade,Nível\n"));
    assert_eq!(exported_ids(&bytes, Locale::Portuguese).len(), 12);
}

#[test]
fn missing_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    gut(&dir)
        .args(["rank", "--config", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

// ---------------------------------------------------------------------------
// gut chart / catalog
// ---------------------------------------------------------------------------

#[test]
fn chart_uses_locale_title_and_palette() {
    let dir = TempDir::new().unwrap();
    gut(&dir)
        .args(["chart", "--locale", "pt-BR"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ranking de Prioridades (GUT)"))
        .stdout(predicate::str::contains("Alta = red"))
        .stdout(predicate::str::contains("Baixa = green"));
}

#[test]
fn catalog_keeps_catalog_order_and_marks_edits() {
    let dir = TempDir::new().unwrap();
    let output = gut(&dir)
        .args(["catalog", "--set", "12=5,5,5"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[2].starts_with("1 "));
    assert!(lines[13].starts_with("12"));
    assert!(lines[13].ends_with('*'));
    assert!(!lines[2].ends_with('*'));
}
