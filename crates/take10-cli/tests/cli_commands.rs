//! Integration tests for the `take10` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn take10() -> Command {
    Command::cargo_bin("take10").unwrap()
}

fn generate_json(args: &[&str]) -> serde_json::Value {
    let output = take10()
        .arg("generate")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success(), "generate failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_dice_and_total() {
    take10()
        .args(["roll", "4d6", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4d6").and(predicate::str::contains("] = ")));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = take10()
        .args(["roll", "3d20", "-s", "7"])
        .output()
        .unwrap();
    let second = take10()
        .args(["roll", "3d20", "-s", "7"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_zero_dice_is_empty() {
    take10()
        .args(["roll", "0d6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn roll_largest_dice() {
    take10()
        .args(["roll", "1000d2147483647", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000d2147483647"));
}

#[test]
fn roll_rejects_bad_expression() {
    take10()
        .args(["roll", "four-d-six"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_default_is_standard_table() {
    take10()
        .args(["generate", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Standard")
                .and(predicate::str::contains("STRENGTH"))
                .and(predicate::str::contains("CONSTITUTION"))
                .and(predicate::str::contains("Total")),
        );
}

#[test]
fn generate_named_strategy() {
    take10()
        .args(["generate", "heroic", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Heroic").and(predicate::str::contains("2d6 + 6")));
}

#[test]
fn generate_unknown_strategy_fails() {
    take10()
        .args(["generate", "UnknownName"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy: UnknownName"));
}

#[test]
fn generate_json_scores_within_range() {
    let json = generate_json(&["Heroic", "--seed", "3", "--count", "5"]);
    assert_eq!(json["strategy"], "Heroic");
    assert_eq!(json["seed"], 3);
    let records = json["scores"].as_array().unwrap();
    assert_eq!(records.len(), 5);
    for record in records {
        for field in [
            "strength",
            "dexterity",
            "intelligence",
            "wisdom",
            "charisma",
            "constitution",
        ] {
            let score = record[field].as_i64().unwrap();
            assert!((8..=18).contains(&score), "{field} = {score}");
        }
    }
}

#[test]
fn generate_json_is_reproducible() {
    let a = generate_json(&["Classic", "--seed", "99", "-n", "3"]);
    let b = generate_json(&["Classic", "--seed", "99", "-n", "3"]);
    assert_eq!(a, b);
}

#[test]
fn generate_multiple_columns() {
    take10()
        .args(["generate", "classic", "-n", "3", "-s", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1").and(predicate::str::contains("#3")));
}

#[test]
fn generate_zero_count_fails() {
    take10()
        .args(["generate", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn generate_accepts_params() {
    take10()
        .args(["generate", "Classic", "-s", "1", "-p", "bias=2", "--param", "mode=gentle"])
        .assert()
        .success();
}

#[test]
fn generate_rejects_malformed_param() {
    take10()
        .args(["generate", "-p", "bias"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key=value"));
}

#[test]
fn generate_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(&path, r#"{ "strategy": "Heroic", "seed": 11 }"#).unwrap();

    let json = generate_json(&["--config", path.to_str().unwrap()]);
    assert_eq!(json["strategy"], "Heroic");
    assert_eq!(json["seed"], 11);
}

#[test]
fn generate_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(&path, r#"{ "strategy": "Heroic", "seed": 11 }"#).unwrap();

    let json = generate_json(&["Classic", "--config", path.to_str().unwrap(), "--seed", "12"]);
    assert_eq!(json["strategy"], "Classic");
    assert_eq!(json["seed"], 12);
}

#[test]
fn generate_bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.json");
    fs::write(&path, r#"{ "stratagem": "Heroic" }"#).unwrap();

    take10()
        .args(["generate", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn verbose_logs_to_stderr() {
    take10()
        .args(["generate", "Classic", "-s", "2", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generating ability scores"));
}

// ---------------------------------------------------------------------------
// strategies
// ---------------------------------------------------------------------------

#[test]
fn strategies_lists_all_three() {
    take10()
        .arg("strategies")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Standard")
                .and(predicate::str::contains("Classic"))
                .and(predicate::str::contains("Heroic"))
                .and(predicate::str::contains("8-18")),
        );
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

#[test]
fn skills_lists_all() {
    take10()
        .arg("skills")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Knowledge (Arcana)")
                .and(predicate::str::contains("Use Magic Device"))
                .and(predicate::str::contains("35 skills")),
        );
}

#[test]
fn skills_filtered_by_ability() {
    take10()
        .args(["skills", "--ability", "STR"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Swim")
                .and(predicate::str::contains("Climb"))
                .and(predicate::str::contains("Stealth").not())
                .and(predicate::str::contains("2 skills")),
        );
}

#[test]
fn skills_for_constitution_is_empty() {
    take10()
        .args(["skills", "-a", "constitution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found"));
}

#[test]
fn skills_unknown_ability_fails() {
    take10()
        .args(["skills", "-a", "luck"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ability"));
}

#[test]
fn skill_shows_governing_ability() {
    take10()
        .args(["skill", "sleight of hand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sleight of Hand").and(predicate::str::contains("DEXTERITY")));
}

#[test]
fn skill_unknown_fails() {
    take10()
        .args(["skill", "Basket Weaving"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill"));
}
