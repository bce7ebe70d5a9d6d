use crate::support::{campus, stdout_json, write_dataset};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unknown_location_exit_code() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .args(["path", "Library", "Gym"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unknown location: gym"));
}

#[test]
fn test_unknown_location_json_envelope() {
    let dir = tempdir().unwrap();

    let output = campus(dir.path())
        .args(["--format", "json", "neighbors", "Gym"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_location");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_quiet_hides_error_message() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .args(["--quiet", "reach", "Gym"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_toml_and_yaml_datasets() {
    let dir = tempdir().unwrap();
    let toml = write_dataset(
        dir.path(),
        "campus.toml",
        "[buildings.Gym]\n[buildings.Pool]\n\n[[routes]]\nfrom = \"Gym\"\nto = \"Pool\"\ndistance = 40\n",
    );
    let yaml = write_dataset(
        dir.path(),
        "campus.yml",
        "buildings:\n  Gym: {}\n  Pool: {}\nroutes:\n  - {from: Gym, to: Pool, distance: 40}\n",
    );

    for data in [toml, yaml] {
        campus(dir.path())
            .arg("--data")
            .arg(&data)
            .args(["path", "gym", "pool"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Gym -> Pool"));
    }
}

#[test]
fn test_dataset_from_environment() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "env.json",
        r#"{"buildings": {"North": {}, "South": {}}, "routes": []}"#,
    );

    campus(dir.path())
        .env("CAMPUS_DATA", &data)
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 locations"));
}

#[test]
fn test_negative_distance_rejected() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "bad.json",
        r#"{"buildings": {"A": {}, "B": {}}, "routes": [{"from": "A", "to": "B", "distance": -1}]}"#,
    );

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid distance"));
}

#[test]
fn test_route_to_unlisted_building_rejected() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "bad.json",
        r#"{"buildings": {"A": {}}, "routes": [{"from": "A", "to": "B", "distance": 1}]}"#,
    );

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown location: b"));
}

#[test]
fn test_unsupported_extension_is_usage_error() {
    let dir = tempdir().unwrap();
    let data = write_dataset(dir.path(), "campus.csv", "A,B,1\n");

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("info")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported dataset file"));
}

#[test]
fn test_malformed_json_is_failure() {
    let dir = tempdir().unwrap();
    let data = write_dataset(dir.path(), "broken.json", "{ not json");

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_missing_dataset_is_failure() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .arg("--data")
        .arg(dir.path().join("missing.json"))
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_locations_follow_file_order() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "order.json",
        r#"{"buildings": {"Zeta": {}, "Alpha": {}, "Mid": {}}, "routes": []}"#,
    );

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "locations"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|loc| loc["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_repeated_building_key_rejected() {
    let dir = tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "repeat.json",
        r#"{"buildings": {"Library": {"description": "one"}, "Library": {"description": "two"}}, "routes": []}"#,
    );

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("locations")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate building `Library`"));
}
