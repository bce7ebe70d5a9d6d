use crate::graph::types::{Distance, LocationId};
use serde::Serialize;

/// One adjacency entry: the location on the other end of a walkway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: LocationId,
    pub distance: Distance,
}

/// Trait for providing graph adjacency to the algorithms
///
/// Implementors guarantee symmetry: `b` appears in `adjacent(a)` with
/// distance `d` iff `a` appears in `adjacent(b)` with distance `d`.
pub trait GraphProvider {
    fn contains(&self, id: &LocationId) -> bool;

    /// Adjacency list in stored order; empty for unknown ids
    fn adjacent(&self, id: &LocationId) -> &[Neighbor];
}
