//! CLI commands for campus

pub mod dispatch;
pub mod graph_info;
pub mod path;
pub mod routes;
pub mod traverse;

mod output;
