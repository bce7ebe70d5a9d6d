use crate::support::{campus, write_dataset, SCENARIO_JSON};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config_dataset_and_route_limits() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), "scenario.json", SCENARIO_JSON);
    fs::write(
        dir.path().join("config.toml"),
        "dataset = \"scenario.json\"\n\n[routes]\nmax_paths = 1\n",
    )
    .unwrap();

    campus(dir.path())
        .args(["routes", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 route(s) from A to C"))
        .stdout(predicate::str::contains("more may exist"));

    // Flags override the configured bound
    campus(dir.path())
        .args(["routes", "A", "C", "--max-paths", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 route(s) from A to C"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    write_dataset(elsewhere.path(), "scenario.json", SCENARIO_JSON);
    let config = elsewhere.path().join("campus.toml");
    fs::write(&config, "dataset = \"scenario.json\"\n").unwrap();

    campus(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 locations"))
        .stdout(predicate::str::contains("E (Observatory)"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("info")
        .assert()
        .code(1);
}

#[test]
fn test_duplicate_walkway_policy() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "dupes.json",
        r#"{
            "buildings": {"A": {}, "B": {}},
            "routes": [
                {"from": "A", "to": "B", "distance": 9},
                {"from": "b", "to": "a", "distance": 5}
            ]
        }"#,
    );

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("walkway already exists"));

    fs::write(
        dir.path().join("config.toml"),
        "[graph]\nduplicate_walkways = \"keep-minimum\"\n",
    )
    .unwrap();

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 5"));
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[graph]\nduplicate_walkways = \"merge\"\n",
    )
    .unwrap();

    campus(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
