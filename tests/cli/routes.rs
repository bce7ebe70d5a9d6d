use crate::support::{campus, scenario_dataset, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_routes_in_discovery_order() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["routes", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 route(s) from A to C"))
        .stdout(predicate::str::contains("1. A -> C (10)"))
        .stdout(predicate::str::contains("2. A -> B -> C (7)"));
}

#[test]
fn test_routes_sorted_by_distance() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["routes", "A", "C", "--sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. A -> B -> C (7)"))
        .stdout(predicate::str::contains("2. A -> C (10)"));
}

#[test]
fn test_routes_json_with_limits() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "routes", "A", "D", "--max-paths", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["truncated"], true);
    assert_eq!(json["sorted"], false);
    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["locations"], serde_json::json!(["a", "c", "d"]));
}

#[test]
fn test_routes_max_depth() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "routes", "A", "D", "--max-depth", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["truncated"], false);
    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["distance"].as_f64(), Some(12.0));
}

#[test]
fn test_routes_to_isolated_location() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["routes", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 route(s) from A to E"));
}

#[test]
fn test_routes_invalid_limit_is_usage_error() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .args(["routes", "Library", "Hostel", "--max-paths", "many"])
        .assert()
        .code(2);
}
