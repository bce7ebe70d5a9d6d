//! Shared output helpers for commands

use campus_core::error::Result;
use campus_core::graph::{LocationGraph, LocationId, Route};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `Library -> Cafeteria -> Parking`
pub fn route_line(graph: &LocationGraph, route: &Route) -> String {
    names(graph, &route.locations).join(" -> ")
}

pub fn names<'a>(graph: &'a LocationGraph, ids: &'a [LocationId]) -> Vec<&'a str> {
    ids.iter().map(|id| graph.display_name(id)).collect()
}
