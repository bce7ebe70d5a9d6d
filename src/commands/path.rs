//! `campus path` and `campus distances`

use campus_core::error::Result;
use campus_core::graph::{LocationGraph, PathResult};
use serde_json::json;

use super::output::{print_json, route_line};
use crate::cli::Cli;
use crate::output_by_format_result;

/// Shortest route. An unreachable destination is a result, not an error.
pub fn execute_path(cli: &Cli, graph: &LocationGraph, from: &str, to: &str) -> Result<()> {
    let source = graph.resolve(from)?;
    let destination = graph.resolve(to)?;
    let result = graph.shortest_path(from, to)?;

    output_by_format_result!(cli.format,
        json => {
            let mut value = serde_json::to_value(&result)?;
            if let Some(object) = value.as_object_mut() {
                object.insert("from".to_string(), json!(source));
                object.insert("to".to_string(), json!(destination));
            }
            print_json(&value)
        },
        human => {
            match &result {
                PathResult::Found(route) => {
                    println!("{}", route_line(graph, route));
                    if !cli.quiet {
                        println!("Distance: {} ({} walkways)", route.distance, route.hops());
                    }
                }
                PathResult::Unreachable => {
                    println!(
                        "No route from {} to {}",
                        graph.display_name(&source),
                        graph.display_name(&destination)
                    );
                }
            }
        }
    )
}

/// Shortest distance to every reachable location, nearest first
pub fn execute_distances(cli: &Cli, graph: &LocationGraph, from: &str) -> Result<()> {
    let source = graph.resolve(from)?;
    let distances = graph.distances_from(from)?;

    output_by_format_result!(cli.format,
        json => {
            let entries: Vec<_> = distances
                .iter()
                .map(|(id, distance)| json!({ "id": id, "distance": distance }))
                .collect();
            print_json(&json!({ "from": source, "distances": entries }))
        },
        human => {
            if !cli.quiet {
                println!("Distances from {}:", graph.display_name(&source));
            }
            for (id, distance) in &distances {
                println!("  {}: {}", graph.display_name(id), distance);
            }
        }
    )
}
