//! `campus locations` and `campus info`

use campus_core::error::Result;
use campus_core::graph::{LocationGraph, Walkway};
use serde_json::json;

use super::output::print_json;
use crate::cli::Cli;
use crate::output_by_format_result;

/// List every location in insertion order
pub fn execute_locations(cli: &Cli, graph: &LocationGraph) -> Result<()> {
    let locations: Vec<_> = graph.locations().collect();

    output_by_format_result!(cli.format,
        json => print_json(&locations),
        human => {
            if !cli.quiet {
                println!("{} locations", locations.len());
            }
            for location in &locations {
                match &location.info.description {
                    Some(description) => println!("  {} ({})", location.name, description),
                    None => println!("  {}", location.name),
                }
            }
        }
    )
}

/// Graph statistics and the walkway list
pub fn execute_info(cli: &Cli, graph: &LocationGraph) -> Result<()> {
    let summary = graph.summary();
    let walkways = graph.walkways();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "locations": summary.locations,
            "walkways": summary.walkways,
            "connected": summary.connected,
            "duplicate_walkways": graph.policy(),
            "walkway_list": walkways,
        })),
        human => {
            println!("Locations: {}", summary.locations);
            println!("Walkways:  {}", summary.walkways);
            println!(
                "Connected: {}",
                if summary.connected { "yes" } else { "no" }
            );
            if !cli.quiet {
                println!();
                for walkway in &walkways {
                    println!("  {}", walkway_line(graph, walkway));
                }
            }
        }
    )
}

fn walkway_line(graph: &LocationGraph, walkway: &Walkway) -> String {
    format!(
        "{} - {}: {}",
        graph.display_name(&walkway.from),
        graph.display_name(&walkway.to),
        walkway.distance
    )
}
