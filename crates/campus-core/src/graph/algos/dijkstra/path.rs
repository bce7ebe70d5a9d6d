//! Route reconstruction from predecessor back-pointers

use crate::graph::types::LocationId;
use std::collections::HashMap;

/// Walk predecessor links from `destination` back to `source`.
///
/// The caller guarantees `destination` was settled, so the chain ends at
/// `source`. The returned sequence runs source-first.
pub fn reconstruct_route(
    source: &LocationId,
    destination: &LocationId,
    predecessors: &HashMap<&LocationId, &LocationId>,
) -> Vec<LocationId> {
    let mut locations = vec![destination.clone()];
    let mut current = destination;

    while current != source {
        let Some(previous) = predecessors.get(current) else {
            break;
        };
        locations.push((*previous).clone());
        current = *previous;
    }

    locations.reverse();
    locations
}
