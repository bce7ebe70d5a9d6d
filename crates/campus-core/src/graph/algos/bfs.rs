use crate::bail_unknown_location;
use crate::error::Result;
use crate::graph::types::LocationId;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal from `source`.
///
/// Returns every location reachable from `source` (itself included) in the
/// order first visited. Walkway distances are ignored.
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn bfs_reachable(provider: &dyn GraphProvider, source: &LocationId) -> Result<Vec<LocationId>> {
    if !provider.contains(source) {
        bail_unknown_location!(source);
    }

    let mut visited: HashSet<&LocationId> = HashSet::new();
    let mut queue: VecDeque<&LocationId> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        for neighbor in provider.adjacent(current) {
            if visited.insert(&neighbor.id) {
                queue.push_back(&neighbor.id);
            }
        }
    }

    tracing::debug!(reached = order.len(), "bfs_complete");
    Ok(order)
}
