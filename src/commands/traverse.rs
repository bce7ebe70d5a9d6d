//! `campus neighbors`, `campus reach` and `campus explore`

use campus_core::error::Result;
use campus_core::graph::{LocationGraph, LocationId};
use serde_json::json;

use super::output::{names, print_json};
use crate::cli::Cli;
use crate::output_by_format_result;

pub fn execute_neighbors(cli: &Cli, graph: &LocationGraph, location: &str) -> Result<()> {
    let id = graph.resolve(location)?;
    let neighbors = graph.neighbors(location)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "location": id,
            "neighbors": neighbors,
        })),
        human => {
            if !cli.quiet {
                println!("Walkways from {}:", graph.display_name(&id));
            }
            for neighbor in neighbors {
                println!("  {}: {}", graph.display_name(&neighbor.id), neighbor.distance);
            }
        }
    )
}

/// Breadth-first reachability
pub fn execute_reach(cli: &Cli, graph: &LocationGraph, from: &str) -> Result<()> {
    let order = graph.reachable_from(from)?;
    output_visit_order(cli, graph, "bfs", &order)
}

/// Depth-first exploration
pub fn execute_explore(cli: &Cli, graph: &LocationGraph, from: &str) -> Result<()> {
    let order = graph.explore(from)?;
    output_visit_order(cli, graph, "dfs", &order)
}

fn output_visit_order(
    cli: &Cli,
    graph: &LocationGraph,
    strategy: &str,
    order: &[LocationId],
) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "from": order.first(),
            "strategy": strategy,
            "locations": order,
        })),
        human => {
            if !cli.quiet {
                println!(
                    "{} of {} locations reachable ({}):",
                    order.len(),
                    graph.location_count(),
                    strategy
                );
            }
            for (i, name) in names(graph, order).into_iter().enumerate() {
                println!("  {}. {}", i + 1, name);
            }
        }
    )
}
