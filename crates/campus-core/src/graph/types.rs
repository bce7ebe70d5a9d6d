use crate::error::{CampusError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Normalized location identifier.
///
/// Names are trimmed, runs of inner whitespace collapse to a single space and
/// the result is lowercased, so `" Admin  Block"` and `"admin block"` resolve
/// to the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Normalize a user-supplied name into an identifier
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if normalized.is_empty() {
            return Err(CampusError::InvalidLocation {
                name: name.to_string(),
            });
        }

        Ok(LocationId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LocationId {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        LocationId::parse(s)
    }
}

/// Walkway length. Unit-agnostic (the bundled campus uses meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Accepts finite, non-negative values only
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Distance(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order; distances are never NaN once constructed
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planar display coordinates; never read by the algorithms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Display metadata owned by the presentation layer and passed through as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form area or site label (e.g. "Main Campus")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// A named vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: LocationId,
    /// Name as first supplied, before normalization
    pub name: String,
    #[serde(flatten)]
    pub info: LocationInfo,
}

/// One undirected walkway, reported once per pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Walkway {
    pub from: LocationId,
    pub to: LocationId,
    pub distance: Distance,
}

/// Ordered sequence of locations with its cumulative distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub locations: Vec<LocationId>,
    pub distance: Distance,
}

impl Route {
    /// Number of walkways traversed
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Found(Route),
    /// Source and destination lie in different connected components
    Unreachable,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Found(route) => Some(route),
            PathResult::Unreachable => None,
        }
    }
}

/// Caller-imposed bounds on route enumeration. Default is unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLimits {
    /// Stop once this many routes have been found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
    /// Never extend a partial route beyond this many hops
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl RouteLimits {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// All simple routes between two locations, in discovery order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSet {
    pub routes: Vec<Route>,
    /// True when `max_paths` stopped the enumeration early
    pub truncated: bool,
}

impl RouteSet {
    /// Stable sort by total distance, for callers that rank routes
    pub fn sort_by_distance(&mut self) {
        self.routes.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    pub fn shortest(&self) -> Option<&Route> {
        self.routes
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub locations: usize,
    pub walkways: usize,
    pub connected: bool,
}

/// How `add_walkway` treats a pair that is already connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateWalkwayPolicy {
    /// Fail with `DuplicateWalkway`, graph unchanged
    #[default]
    Reject,
    /// Keep the shorter of the existing and the new distance
    KeepMinimum,
}

impl std::str::FromStr for DuplicateWalkwayPolicy {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(DuplicateWalkwayPolicy::Reject),
            "keep-minimum" | "keep_minimum" | "min" => Ok(DuplicateWalkwayPolicy::KeepMinimum),
            other => Err(CampusError::invalid_value(
                "duplicate walkway policy",
                format!("{other} (expected: reject, keep-minimum)"),
            )),
        }
    }
}
