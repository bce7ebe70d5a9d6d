//! Campus Core Library
//!
//! Location graph, route search and the campus planning containers behind
//! the `campus` command-line tool.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod graph;
pub mod logging;
pub mod tasks;
