//! Shared graph handle
//!
//! Queries take the read lock and may run in parallel; each mutation takes
//! the write lock for one atomic structural change.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::graph::store::LocationGraph;
use crate::graph::traversal::Neighbor;
use crate::graph::types::{
    Distance, GraphSummary, Location, LocationId, LocationInfo, PathResult, RouteLimits, RouteSet,
};

/// Cloneable handle to one graph instance, passed to every caller
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<LocationGraph>>,
}

impl SharedGraph {
    pub fn new(graph: LocationGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Shared access for a batch of queries against one consistent state.
    /// Lock poisoning is ignored; mutations validate before changing state.
    pub fn read(&self) -> RwLockReadGuard<'_, LocationGraph> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocationGraph> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Swap in a freshly loaded graph, returning the previous one
    pub fn replace(&self, graph: LocationGraph) -> LocationGraph {
        std::mem::replace(&mut *self.write(), graph)
    }

    /// Owned copy of the current graph
    pub fn snapshot(&self) -> LocationGraph {
        self.read().clone()
    }

    pub fn add_location(&self, name: &str) -> Result<LocationId> {
        self.write().add_location(name)
    }

    pub fn add_location_with_info(&self, name: &str, info: LocationInfo) -> Result<LocationId> {
        self.write().add_location_with_info(name, info)
    }

    pub fn add_walkway(&self, a: &str, b: &str, distance: f64) -> Result<()> {
        self.write().add_walkway(a, b, distance)
    }

    pub fn remove_location(&self, name: &str) -> Result<Location> {
        self.write().remove_location(name)
    }

    pub fn remove_walkway(&self, a: &str, b: &str) -> Result<Distance> {
        self.write().remove_walkway(a, b)
    }

    pub fn neighbors(&self, name: &str) -> Result<Vec<Neighbor>> {
        self.read().neighbors(name).map(<[Neighbor]>::to_vec)
    }

    pub fn reachable_from(&self, source: &str) -> Result<Vec<LocationId>> {
        self.read().reachable_from(source)
    }

    pub fn explore(&self, source: &str) -> Result<Vec<LocationId>> {
        self.read().explore(source)
    }

    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<PathResult> {
        self.read().shortest_path(source, destination)
    }

    pub fn distances_from(&self, source: &str) -> Result<Vec<(LocationId, Distance)>> {
        self.read().distances_from(source)
    }

    pub fn all_routes(
        &self,
        source: &str,
        destination: &str,
        limits: RouteLimits,
    ) -> Result<RouteSet> {
        self.read().all_routes(source, destination, limits)
    }

    pub fn summary(&self) -> GraphSummary {
        self.read().summary()
    }
}
