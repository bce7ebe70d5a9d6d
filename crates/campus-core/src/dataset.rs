//! Campus dataset loading
//!
//! A dataset lists buildings with display metadata and the walkways between
//! them:
//!
//! ```json
//! {
//!   "buildings": { "Library": { "description": "Central Library" } },
//!   "routes": [ { "from": "Library", "to": "Cafeteria", "distance": 100 } ]
//! }
//! ```
//!
//! JSON, TOML and YAML files carry the same shape.

mod buildings;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::error::Result;
use crate::graph::types::{DuplicateWalkwayPolicy, LocationInfo};
use crate::graph::LocationGraph;

pub use buildings::Buildings;

/// One walkway definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Seed data for a campus graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusDataset {
    /// Listed in file order; a repeated name is a parse error
    #[serde(default)]
    pub buildings: Buildings,
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// Dataset file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Toml,
    Yaml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(DatasetFormat::Json),
            Some("toml") => Ok(DatasetFormat::Toml),
            Some("yaml") | Some("yml") => Ok(DatasetFormat::Yaml),
            _ => bail_usage!(format!(
                "unsupported dataset file {} (expected .json, .toml, .yaml or .yml)",
                path.display()
            )),
        }
    }
}

impl CampusDataset {
    /// Load a dataset file, format chosen by extension
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let format = DatasetFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let dataset = Self::parse(&content, format)?;
        tracing::debug!(
            buildings = dataset.buildings.len(),
            routes = dataset.routes.len(),
            "dataset_loaded"
        );
        Ok(dataset)
    }

    pub fn parse(content: &str, format: DatasetFormat) -> Result<Self> {
        Ok(match format {
            DatasetFormat::Json => serde_json::from_str(content)?,
            DatasetFormat::Toml => toml::from_str(content)?,
            DatasetFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    /// Build a graph through the public mutation API.
    ///
    /// Buildings are added first, then routes; a route naming an unlisted
    /// building fails with `UnknownLocation` and nothing partial is returned.
    pub fn build_graph(&self, policy: DuplicateWalkwayPolicy) -> Result<LocationGraph> {
        let mut graph = LocationGraph::with_policy(policy);
        for (name, info) in self.buildings.iter() {
            graph.add_location_with_info(name, info.clone())?;
        }
        for route in &self.routes {
            graph.add_walkway(&route.from, &route.to, route.distance)?;
        }
        Ok(graph)
    }

    /// The bundled eight-building campus, distances in meters
    pub fn default_campus() -> Self {
        let buildings = [
            ("CS Department", "Computer Science Department"),
            ("Library", "Central Library"),
            ("Cafeteria", "Student Cafeteria"),
            ("Auditorium", "Main Auditorium"),
            ("Parking", "Student Parking"),
            ("Admin Block", "Administrative Block"),
            ("Sports Complex", "Sports and Recreation Center"),
            ("Hostel", "Student Hostel"),
        ]
        .into_iter()
        .map(|(name, description)| {
            (
                name.to_string(),
                LocationInfo {
                    description: Some(description.to_string()),
                    location: Some("Main Campus".to_string()),
                    ..Default::default()
                },
            )
        })
        .collect();

        let routes = [
            ("CS Department", "Library", 150.0),
            ("CS Department", "Cafeteria", 200.0),
            ("Library", "Cafeteria", 100.0),
            ("Library", "Auditorium", 300.0),
            ("Cafeteria", "Auditorium", 250.0),
            ("Cafeteria", "Parking", 180.0),
            ("Auditorium", "Admin Block", 120.0),
            ("Parking", "Admin Block", 200.0),
            ("Admin Block", "Sports Complex", 400.0),
            ("Sports Complex", "Hostel", 350.0),
            ("Hostel", "CS Department", 500.0),
            ("Hostel", "Library", 450.0),
        ]
        .into_iter()
        .map(|(from, to, distance)| RouteSpec {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        })
        .collect();

        Self { buildings, routes }
    }
}
