mod path;

use crate::bail_unknown_location;
use crate::error::Result;
use crate::graph::types::{Distance, LocationId, PathResult, Route};
use crate::graph::GraphProvider;
use path::reconstruct_route;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

/// Min-heap entry (wrapped in `Reverse`), ordered by tentative distance and
/// then by push sequence so equal distances settle first-discovered-first.
#[derive(Debug, Clone)]
pub struct HeapEntry<'a> {
    pub location: &'a LocationId,
    pub distance: Distance,
    pub seq: u64,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState<'a> {
    tentative: HashMap<&'a LocationId, Distance>,
    predecessors: HashMap<&'a LocationId, &'a LocationId>,
    settled: HashSet<&'a LocationId>,
    settle_order: Vec<(&'a LocationId, Distance)>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
    next_seq: u64,
}

impl<'a> DijkstraState<'a> {
    fn new(source: &'a LocationId) -> Self {
        let mut state = Self {
            tentative: HashMap::new(),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            settle_order: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(source, Distance::ZERO);
        state
    }

    fn push(&mut self, location: &'a LocationId, distance: Distance) {
        self.tentative.insert(location, distance);
        self.heap.push(Reverse(HeapEntry {
            location,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Settle vertices until the heap drains or `target` is settled
    fn run(&mut self, provider: &'a dyn GraphProvider, target: Option<&LocationId>) {
        while let Some(Reverse(HeapEntry {
            location, distance, ..
        })) = self.heap.pop()
        {
            // Stale entry superseded by a later relaxation
            if !self.settled.insert(location) {
                continue;
            }
            self.settle_order.push((location, distance));
            tracing::trace!(location = %location, %distance, "settled");

            if target == Some(location) {
                return;
            }

            for neighbor in provider.adjacent(location) {
                if self.settled.contains(&neighbor.id) {
                    continue;
                }

                let candidate = distance + neighbor.distance;
                let improves = self
                    .tentative
                    .get(&neighbor.id)
                    .is_none_or(|best| candidate.total_cmp(best).is_lt());

                if improves {
                    self.predecessors.insert(&neighbor.id, location);
                    self.push(&neighbor.id, candidate);
                }
            }
        }
    }
}

/// Shortest route from `source` to `destination`.
///
/// Returns `PathResult::Unreachable` when the two lie in different connected
/// components; only unknown endpoints are errors.
#[tracing::instrument(skip(provider), fields(source = %source, destination = %destination))]
pub fn dijkstra_shortest_path(
    provider: &dyn GraphProvider,
    source: &LocationId,
    destination: &LocationId,
) -> Result<PathResult> {
    if !provider.contains(source) {
        bail_unknown_location!(source);
    }
    if !provider.contains(destination) {
        bail_unknown_location!(destination);
    }

    if source == destination {
        return Ok(PathResult::Found(Route {
            locations: vec![source.clone()],
            distance: Distance::ZERO,
        }));
    }

    let start = Instant::now();
    let mut state = DijkstraState::new(source);
    state.run(provider, Some(destination));
    crate::trace_time!(start, "dijkstra_search", settled = state.settle_order.len());

    if !state.settled.contains(destination) {
        tracing::debug!("unreachable");
        return Ok(PathResult::Unreachable);
    }

    let distance = state
        .tentative
        .get(destination)
        .copied()
        .unwrap_or(Distance::ZERO);
    let locations = reconstruct_route(source, destination, &state.predecessors);

    tracing::debug!(hops = locations.len() - 1, %distance, "shortest_path_found");
    Ok(PathResult::Found(Route {
        locations,
        distance,
    }))
}

/// Minimum distance from `source` to every reachable location.
///
/// Entries come back in settle order, so the source is first with distance 0
/// and distances never decrease along the list.
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn dijkstra_distances(
    provider: &dyn GraphProvider,
    source: &LocationId,
) -> Result<Vec<(LocationId, Distance)>> {
    if !provider.contains(source) {
        bail_unknown_location!(source);
    }

    let mut state = DijkstraState::new(source);
    state.run(provider, None);

    Ok(state
        .settle_order
        .into_iter()
        .map(|(location, distance)| (location.clone(), distance))
        .collect())
}

#[cfg(test)]
mod tests;
