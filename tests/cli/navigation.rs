use crate::support::{campus, scenario_dataset, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Bundled campus
// ============================================================================

#[test]
fn test_locations_lists_bundled_campus() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 locations"))
        .stdout(predicate::str::contains(
            "CS Department (Computer Science Department)",
        ))
        .stdout(predicate::str::contains("Sports Complex"));
}

#[test]
fn test_info_json() {
    let dir = tempdir().unwrap();

    let output = campus(dir.path())
        .args(["--format", "json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["locations"], 8);
    assert_eq!(json["walkways"], 12);
    assert_eq!(json["connected"], true);
    assert_eq!(json["duplicate_walkways"], "reject");
    assert_eq!(json["walkway_list"].as_array().unwrap().len(), 12);
}

#[test]
fn test_path_on_bundled_campus() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .args(["path", "cs department", "ADMIN  BLOCK"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CS Department -> Library -> Auditorium -> Admin Block",
        ))
        .stdout(predicate::str::contains("Distance: 570 (3 walkways)"));
}

#[test]
fn test_neighbors_of_library() {
    let dir = tempdir().unwrap();

    campus(dir.path())
        .args(["neighbors", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS Department: 150"))
        .stdout(predicate::str::contains("Cafeteria: 100"))
        .stdout(predicate::str::contains("Hostel: 450"));
}

// ============================================================================
// Scenario graph
// ============================================================================

#[test]
fn test_shortest_path_json() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "path", "A", "D"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "found");
    assert_eq!(json["from"], "a");
    assert_eq!(json["to"], "d");
    assert_eq!(json["locations"], serde_json::json!(["a", "b", "c", "d"]));
    assert_eq!(json["distance"].as_f64(), Some(9.0));
}

#[test]
fn test_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["path", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from A to E"));

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "path", "A", "E"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"], "unreachable");
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["path", "E", "e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 0 (0 walkways)"));
}

#[test]
fn test_reach_and_explore_exclude_isolated_location() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    for command in ["reach", "explore"] {
        let output = campus(dir.path())
            .arg("--data")
            .arg(&data)
            .args(["--format", "json", command, "A"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        let mut locations: Vec<_> = json["locations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(locations[0], "a");
        locations.sort();
        assert_eq!(locations, vec!["a", "b", "c", "d"]);
    }
}

#[test]
fn test_reach_human_output() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["reach", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 5 locations reachable (bfs):"))
        .stdout(predicate::str::contains("1. A"));
}

#[test]
fn test_distances_nearest_first() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    let output = campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "distances", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let pairs: Vec<(String, f64)> = json["distances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            (
                entry["id"].as_str().unwrap().to_string(),
                entry["distance"].as_f64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), 0.0),
            ("b".to_string(), 4.0),
            ("c".to_string(), 7.0),
            ("d".to_string(), 9.0),
        ]
    );
}

#[test]
fn test_quiet_suppresses_headers() {
    let dir = tempdir().unwrap();
    let data = scenario_dataset(dir.path());

    campus(dir.path())
        .arg("--data")
        .arg(&data)
        .args(["--quiet", "path", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"))
        .stdout(predicate::str::contains("Distance").not());
}
