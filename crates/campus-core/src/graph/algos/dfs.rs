use crate::bail_unknown_location;
use crate::error::Result;
use crate::graph::types::LocationId;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Depth-first traversal from `source`.
///
/// Visits a whole branch before backtracking and returns locations in the
/// order first visited. Uses an explicit stack of (location, next neighbor
/// index) frames, so the order matches the recursive formulation without
/// recursion depth limits on long corridors.
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn dfs_explore(provider: &dyn GraphProvider, source: &LocationId) -> Result<Vec<LocationId>> {
    if !provider.contains(source) {
        bail_unknown_location!(source);
    }

    let mut visited: HashSet<&LocationId> = HashSet::new();
    let mut stack: Vec<(&LocationId, usize)> = Vec::new();
    let mut order = Vec::new();

    visited.insert(source);
    order.push(source.clone());
    stack.push((source, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        frame.1 += 1;

        let Some(neighbor) = provider.adjacent(current).get(next) else {
            stack.pop();
            continue;
        };

        if visited.insert(&neighbor.id) {
            order.push(neighbor.id.clone());
            stack.push((&neighbor.id, 0));
        }
    }

    tracing::debug!(reached = order.len(), "dfs_complete");
    Ok(order)
}
