//! Location graph store
//!
//! Owns every location and walkway. Walkways are kept as two directed
//! half-edges, one in each endpoint's adjacency list; every mutation updates
//! both sides or neither.

use std::collections::HashMap;

use crate::bail_unknown_location;
use crate::error::{CampusError, Result};
use crate::graph::algos;
use crate::graph::traversal::{GraphProvider, Neighbor};
use crate::graph::types::{
    Distance, DuplicateWalkwayPolicy, GraphSummary, Location, LocationId, LocationInfo,
    PathResult, RouteLimits, RouteSet, Walkway,
};

#[derive(Debug, Clone)]
struct Entry {
    location: Location,
    adjacency: Vec<Neighbor>,
}

/// Weighted, undirected graph of campus locations
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    entries: HashMap<LocationId, Entry>,
    order: Vec<LocationId>,
    walkway_count: usize,
    policy: DuplicateWalkwayPolicy,
}

impl LocationGraph {
    /// Create an empty graph that rejects duplicate walkways
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with an explicit duplicate-walkway policy
    pub fn with_policy(policy: DuplicateWalkwayPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicateWalkwayPolicy {
        self.policy
    }

    /// Resolve a user-supplied name to the id of an existing location
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        let Ok(id) = LocationId::parse(name) else {
            bail_unknown_location!(name.trim());
        };
        if !self.entries.contains_key(&id) {
            bail_unknown_location!(id);
        }
        Ok(id)
    }

    pub fn add_location(&mut self, name: &str) -> Result<LocationId> {
        self.add_location_with_info(name, LocationInfo::default())
    }

    /// Insert a new location carrying opaque display metadata
    #[tracing::instrument(level = "debug", skip(self, info))]
    pub fn add_location_with_info(&mut self, name: &str, info: LocationInfo) -> Result<LocationId> {
        let id = LocationId::parse(name)?;
        if self.entries.contains_key(&id) {
            return Err(CampusError::DuplicateLocation { id: id.to_string() });
        }

        let location = Location {
            id: id.clone(),
            name: name.trim().to_string(),
            info,
        };
        self.entries.insert(
            id.clone(),
            Entry {
                location,
                adjacency: Vec::new(),
            },
        );
        self.order.push(id.clone());
        tracing::debug!(location = %id, "location_added");
        Ok(id)
    }

    /// Insert an undirected walkway between two existing locations
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_walkway(&mut self, a: &str, b: &str, distance: f64) -> Result<()> {
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;

        if from == to {
            return Err(CampusError::SelfLoop { id: from.to_string() });
        }

        let Some(distance) = Distance::new(distance) else {
            return Err(CampusError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        };

        if let Some(existing) = self.walkway(&from, &to) {
            return match self.policy {
                DuplicateWalkwayPolicy::Reject => Err(CampusError::DuplicateWalkway {
                    from: from.to_string(),
                    to: to.to_string(),
                }),
                DuplicateWalkwayPolicy::KeepMinimum => {
                    if distance.total_cmp(&existing).is_lt() {
                        self.set_half_edge(&from, &to, distance);
                        self.set_half_edge(&to, &from, distance);
                        tracing::debug!(%from, %to, %distance, "walkway_shortened");
                    }
                    Ok(())
                }
            };
        }

        self.push_half_edge(&from, &to, distance);
        self.push_half_edge(&to, &from, distance);
        self.walkway_count += 1;
        tracing::debug!(%from, %to, %distance, "walkway_added");
        Ok(())
    }

    /// Remove a location and every walkway touching it
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_location(&mut self, name: &str) -> Result<Location> {
        let id = self.resolve(name)?;
        let Some(entry) = self.entries.remove(&id) else {
            bail_unknown_location!(id);
        };

        for neighbor in &entry.adjacency {
            if let Some(other) = self.entries.get_mut(&neighbor.id) {
                other.adjacency.retain(|n| n.id != id);
            }
        }
        self.walkway_count -= entry.adjacency.len();
        self.order.retain(|existing| *existing != id);

        tracing::debug!(
            location = %id,
            walkways_removed = entry.adjacency.len(),
            "location_removed"
        );
        Ok(entry.location)
    }

    /// Remove the walkway between two locations, returning its distance
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_walkway(&mut self, a: &str, b: &str) -> Result<Distance> {
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;

        let Some(distance) = self.walkway(&from, &to) else {
            return Err(CampusError::unknown_walkway(from, to));
        };

        if let Some(entry) = self.entries.get_mut(&from) {
            entry.adjacency.retain(|n| n.id != to);
        }
        if let Some(entry) = self.entries.get_mut(&to) {
            entry.adjacency.retain(|n| n.id != from);
        }
        self.walkway_count -= 1;
        tracing::debug!(%from, %to, "walkway_removed");
        Ok(distance)
    }

    /// Adjacent locations with walkway distances, in stored order
    pub fn neighbors(&self, name: &str) -> Result<&[Neighbor]> {
        let id = self.resolve(name)?;
        Ok(self.adjacent(&id))
    }

    /// Breadth-first reachability from `source`, in first-visited order
    pub fn reachable_from(&self, source: &str) -> Result<Vec<LocationId>> {
        let source = self.resolve(source)?;
        algos::bfs_reachable(self, &source)
    }

    /// Depth-first reachability from `source`, in first-visited order
    pub fn explore(&self, source: &str) -> Result<Vec<LocationId>> {
        let source = self.resolve(source)?;
        algos::dfs_explore(self, &source)
    }

    /// Minimum-distance route between two locations
    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<PathResult> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        algos::dijkstra_shortest_path(self, &source, &destination)
    }

    /// Minimum distance from `source` to every reachable location, in settle order
    pub fn distances_from(&self, source: &str) -> Result<Vec<(LocationId, Distance)>> {
        let source = self.resolve(source)?;
        algos::dijkstra_distances(self, &source)
    }

    /// Every simple route between two locations, in discovery order
    pub fn all_routes(
        &self,
        source: &str,
        destination: &str,
        limits: RouteLimits,
    ) -> Result<RouteSet> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        algos::enumerate_routes(self, &source, &destination, limits)
    }

    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.entries.get(id).map(|entry| &entry.location)
    }

    /// Display name for an id, falling back to the id itself
    pub fn display_name<'a>(&'a self, id: &'a LocationId) -> &'a str {
        self.location(id)
            .map(|location| location.name.as_str())
            .unwrap_or(id.as_str())
    }

    /// All locations in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| &entry.location))
    }

    /// Every walkway once, oriented from the earlier-inserted endpoint
    pub fn walkways(&self) -> Vec<Walkway> {
        let position: HashMap<&LocationId, usize> =
            self.order.iter().enumerate().map(|(i, id)| (id, i)).collect();

        let mut walkways = Vec::with_capacity(self.walkway_count);
        for (i, id) in self.order.iter().enumerate() {
            for neighbor in self.adjacent(id) {
                if position.get(&neighbor.id).is_some_and(|&j| j > i) {
                    walkways.push(Walkway {
                        from: id.clone(),
                        to: neighbor.id.clone(),
                        distance: neighbor.distance,
                    });
                }
            }
        }
        walkways
    }

    /// Distance of the walkway between two ids, if one exists
    pub fn walkway(&self, from: &LocationId, to: &LocationId) -> Option<Distance> {
        self.adjacent(from)
            .iter()
            .find(|n| n.id == *to)
            .map(|n| n.distance)
    }

    pub fn location_count(&self) -> usize {
        self.order.len()
    }

    pub fn walkway_count(&self) -> usize {
        self.walkway_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when every location is reachable from every other (an empty graph counts)
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.order.first() else {
            return true;
        };
        algos::bfs_reachable(self, first)
            .map(|reached| reached.len() == self.order.len())
            .unwrap_or(false)
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            locations: self.location_count(),
            walkways: self.walkway_count(),
            connected: self.is_connected(),
        }
    }

    fn push_half_edge(&mut self, from: &LocationId, to: &LocationId, distance: Distance) {
        if let Some(entry) = self.entries.get_mut(from) {
            entry.adjacency.push(Neighbor {
                id: to.clone(),
                distance,
            });
        }
    }

    fn set_half_edge(&mut self, from: &LocationId, to: &LocationId, distance: Distance) {
        if let Some(entry) = self.entries.get_mut(from) {
            if let Some(neighbor) = entry.adjacency.iter_mut().find(|n| n.id == *to) {
                neighbor.distance = distance;
            }
        }
    }
}

impl GraphProvider for LocationGraph {
    fn contains(&self, id: &LocationId) -> bool {
        self.entries.contains_key(id)
    }

    fn adjacent(&self, id: &LocationId) -> &[Neighbor] {
        self.entries
            .get(id)
            .map(|entry| entry.adjacency.as_slice())
            .unwrap_or(&[])
    }
}
