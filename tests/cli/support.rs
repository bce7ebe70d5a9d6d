use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for campus, isolated from the user's config and log filters.
/// `config_dir` stands in for the default config directory.
pub fn campus(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("campus");
    cmd.env("CAMPUS_NAV_CONFIG_DIR", config_dir)
        .env_remove("CAMPUS_DATA")
        .env_remove("CAMPUS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Locations A..E; walkways A-C 10, A-B 4, B-C 3, C-D 2; E isolated.
/// A-C is listed first so discovery order differs from distance order.
pub const SCENARIO_JSON: &str = r#"{
  "buildings": {
    "A": {"description": "Gate"},
    "B": {},
    "C": {},
    "D": {},
    "E": {"description": "Observatory"}
  },
  "routes": [
    {"from": "A", "to": "C", "distance": 10},
    {"from": "A", "to": "B", "distance": 4},
    {"from": "B", "to": "C", "distance": 3},
    {"from": "C", "to": "D", "distance": 2}
  ]
}"#;

pub fn write_dataset(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn scenario_dataset(dir: &Path) -> PathBuf {
    write_dataset(dir, "scenario.json", SCENARIO_JSON)
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
