use crate::bail_unknown_location;
use crate::error::Result;
use crate::graph::types::{Distance, LocationId, Route, RouteLimits, RouteSet};
use crate::graph::GraphProvider;
use std::collections::HashSet;
use std::time::Instant;

/// Backtracking state: the partial route being extended
struct RouteSearch<'a> {
    provider: &'a dyn GraphProvider,
    destination: &'a LocationId,
    limits: RouteLimits,
    path: Vec<&'a LocationId>,
    on_path: HashSet<&'a LocationId>,
    routes: Vec<Route>,
    truncated: bool,
}

impl<'a> RouteSearch<'a> {
    fn is_full(&self) -> bool {
        self.limits
            .max_paths
            .is_some_and(|max| self.routes.len() >= max)
    }

    fn extend(&mut self, current: &'a LocationId, distance: Distance) {
        if current == self.destination {
            self.routes.push(Route {
                locations: self.path.iter().map(|id| (*id).clone()).collect(),
                distance,
            });
            tracing::trace!(%distance, hops = self.path.len() - 1, "route_found");
            return;
        }

        let hops = self.path.len() - 1;
        if self.limits.max_depth.is_some_and(|max| hops >= max) {
            return;
        }

        let provider = self.provider;
        for neighbor in provider.adjacent(current) {
            if self.is_full() {
                self.truncated = true;
                return;
            }
            if self.on_path.contains(&neighbor.id) {
                continue;
            }

            self.path.push(&neighbor.id);
            self.on_path.insert(&neighbor.id);

            self.extend(&neighbor.id, distance + neighbor.distance);

            self.on_path.remove(&neighbor.id);
            self.path.pop();
        }
    }
}

/// Every simple route from `source` to `destination`.
///
/// Routes are emitted in discovery order of a depth-first backtracking search
/// over adjacency in stored order; nothing is sorted here. `limits` bounds the
/// search: `max_paths` stops after that many routes, `max_depth` never extends
/// a partial route past that many hops. Cost is exponential on dense graphs
/// when unrestricted.
#[tracing::instrument(skip(provider), fields(source = %source, destination = %destination))]
pub fn enumerate_routes(
    provider: &dyn GraphProvider,
    source: &LocationId,
    destination: &LocationId,
    limits: RouteLimits,
) -> Result<RouteSet> {
    if !provider.contains(source) {
        bail_unknown_location!(source);
    }
    if !provider.contains(destination) {
        bail_unknown_location!(destination);
    }

    if limits.max_paths == Some(0) {
        return Ok(RouteSet {
            routes: Vec::new(),
            truncated: true,
        });
    }

    let start = Instant::now();
    let mut search = RouteSearch {
        provider,
        destination,
        limits,
        path: vec![source],
        on_path: HashSet::from([source]),
        routes: Vec::new(),
        truncated: false,
    };
    search.extend(source, Distance::ZERO);
    crate::trace_time!(start, "route_enumeration", routes = search.routes.len());

    if search.truncated {
        tracing::debug!(max_paths = ?limits.max_paths, "route_enumeration_truncated");
    }

    Ok(RouteSet {
        routes: search.routes,
        truncated: search.truncated,
    })
}
