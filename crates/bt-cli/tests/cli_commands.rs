//! End-to-end tests for the `bt` command line.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A definition whose first pool only opens in the forest.
const FOREST: &str = r#"{
    "pools": [
        {
            "kind": "weighted",
            "when": [{ "equals": { "key": "biome", "value": "forest" } }],
            "entries": [
                { "weight": 3, "value": "oak" },
                { "weight": 0, "value": "never" }
            ]
        },
        {
            "kind": "chance",
            "entries": [
                { "weight": 1.0, "value": "stick" },
                { "weight": 0.0, "value": "ghost" }
            ]
        }
    ]
}"#;

/// A definition with a real choice to make.
const COINS: &str = r#"{
    "pools": [
        {
            "kind": "weighted",
            "rolls": 5,
            "entries": [
                { "weight": 1, "value": "copper" },
                { "weight": 1, "table": {
                    "kind": "weighted",
                    "entries": [
                        { "weight": 1, "value": "silver" },
                        { "weight": 1, "value": "gold" }
                    ]
                } }
            ]
        }
    ]
}"#;

fn write_definition(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn bt() -> Command {
    Command::cargo_bin("bt").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_with_matching_context() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("roll")
        .arg(&file)
        .args(["--set", "biome=forest"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("oak")
                .and(predicate::str::contains("stick"))
                .and(predicate::str::contains("never").not())
                .and(predicate::str::contains("ghost").not()),
        );
}

#[test]
fn roll_skips_gated_pool() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("roll")
        .arg(&file)
        .args(["--set", "biome=desert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stick").and(predicate::str::contains("oak").not()));
}

#[test]
fn roll_many_times() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("roll")
        .arg(&file)
        .args(["--times", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll 1").and(predicate::str::contains("Roll 3")));
}

#[test]
fn roll_is_reproducible_for_a_seed() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "coins.json", COINS);

    let first = bt()
        .arg("roll")
        .arg(&file)
        .args(["--seed", "7", "--times", "4"])
        .output()
        .unwrap();
    let second = bt()
        .arg("roll")
        .arg(&file)
        .args(["--seed", "7", "--times", "4"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_rejects_zero_times() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("roll")
        .arg(&file)
        .args(["--times", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--times"));
}

#[test]
fn roll_rejects_malformed_context() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("roll")
        .arg(&file)
        .args(["--set", "biome"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid context assignment 'biome'"));
}

#[test]
fn roll_missing_file() {
    let dir = TempDir::new().unwrap();
    bt().arg("roll")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn roll_reports_zero_weight_table() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(
        &dir,
        "empty.json",
        r#"{ "pools": [{ "kind": "weighted", "entries": [{ "weight": 0, "value": "x" }] }] }"#,
    );
    bt().arg("roll")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("total weight of zero"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_summarizes_pools() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("weighted")
                .and(predicate::str::contains("chance"))
                .and(predicate::str::contains("biome = forest"))
                .and(predicate::str::contains("All checks passed: 2 pools")),
        );
}

#[test]
fn check_leaves_chance_total_blank() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(
        &dir,
        "chance.json",
        r#"{ "pools": [{ "kind": "chance", "entries": [
            { "weight": 0.25, "value": "x" },
            { "weight": 0.5, "value": "y" }
        ] }] }"#,
    );
    bt().arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.75").not());
}

#[test]
fn check_shows_weighted_total() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(
        &dir,
        "weighted.json",
        r#"{ "pools": [{ "kind": "weighted", "entries": [
            { "weight": 2.5, "value": "x" },
            { "weight": 4, "value": "y" }
        ] }] }"#,
    );
    bt().arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("6.5"));
}

#[test]
fn check_rejects_negative_weight() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(
        &dir,
        "bad.json",
        r#"{ "pools": [{ "kind": "chance", "entries": [{ "weight": -0.5, "value": "x" }] }] }"#,
    );
    bt().arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid weight"));
}

#[test]
fn check_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "bad.json", "{ pools: ");
    bt().arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid definition"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_counts_every_sample() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("stats")
        .arg(&file)
        .args(["--samples", "200", "--set", "biome=forest"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("200 samples")
                .and(predicate::str::contains("oak"))
                .and(predicate::str::contains("1.000"))
                .and(predicate::str::contains("400 values produced")),
        );
}

#[test]
fn stats_nested_values_appear() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "coins.json", COINS);
    bt().arg("stats")
        .arg(&file)
        .args(["-n", "500"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("copper")
                .and(predicate::str::contains("silver"))
                .and(predicate::str::contains("gold"))
                .and(predicate::str::contains("2500 values produced")),
        );
}

#[test]
fn stats_rejects_zero_samples() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().arg("stats")
        .arg(&file)
        .args(["-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--samples"));
}

#[test]
fn stats_with_nothing_produced() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(
        &dir,
        "gated.json",
        r#"{ "pools": [{ "kind": "chance", "when": [{ "present": { "key": "boss" } }],
             "entries": [{ "weight": 1, "value": "crown" }] }] }"#,
    );
    bt().arg("stats")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No values produced"));
}

// ---------------------------------------------------------------------------
// global flags
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = write_definition(&dir, "forest.json", FOREST);
    bt().args(["-v", "roll"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded definition"));
}

#[test]
fn help_lists_commands() {
    bt().arg("--help").assert().success().stdout(
        predicate::str::contains("roll")
            .and(predicate::str::contains("check"))
            .and(predicate::str::contains("stats")),
    );
}
