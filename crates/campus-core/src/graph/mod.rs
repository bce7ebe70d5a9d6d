//! Campus navigation graph
//!
//! Provides the weighted location graph and its algorithms:
//! - Location graph store with symmetric walkway storage
//! - BFS reachability and DFS exploration
//! - Dijkstra shortest paths
//! - Exhaustive simple-route enumeration
//! - Shared handle for concurrent readers

pub mod algos;
pub mod shared;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs_reachable, dfs_explore, dijkstra_distances, dijkstra_shortest_path, enumerate_routes,
};
pub use shared::SharedGraph;
pub use store::LocationGraph;
pub use traversal::{GraphProvider, Neighbor};
pub use types::{
    Coordinates, Distance, DuplicateWalkwayPolicy, GraphSummary, Location, LocationId,
    LocationInfo, PathResult, Route, RouteLimits, RouteSet, Walkway,
};
