//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first reachability
//! - `dfs`: Depth-first exploration
//! - `dijkstra`: Weighted shortest paths
//! - `routes`: Exhaustive simple-route enumeration

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod routes;

pub use bfs::bfs_reachable;
pub use dfs::dfs_explore;
pub use dijkstra::{dijkstra_distances, dijkstra_shortest_path};
pub use routes::enumerate_routes;
