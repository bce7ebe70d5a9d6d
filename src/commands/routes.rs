//! `campus routes` - every simple route between two locations

use campus_core::error::Result;
use campus_core::graph::{LocationGraph, RouteLimits};
use serde_json::json;

use super::output::{print_json, route_line};
use crate::cli::{Cli, RoutesArgs};
use crate::output_by_format_result;

/// Command-line bounds override the config file's, field by field
pub fn merge_limits(configured: RouteLimits, args: &RoutesArgs) -> RouteLimits {
    RouteLimits {
        max_paths: args.max_paths.or(configured.max_paths),
        max_depth: args.max_depth.or(configured.max_depth),
    }
}

pub fn execute(
    cli: &Cli,
    graph: &LocationGraph,
    args: &RoutesArgs,
    limits: RouteLimits,
) -> Result<()> {
    let source = graph.resolve(&args.from)?;
    let destination = graph.resolve(&args.to)?;
    let mut set = graph.all_routes(&args.from, &args.to, limits)?;
    if args.sort {
        set.sort_by_distance();
    }

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "from": source,
            "to": destination,
            "sorted": args.sort,
            "truncated": set.truncated,
            "routes": set.routes,
        })),
        human => {
            if !cli.quiet {
                println!(
                    "{} route(s) from {} to {}",
                    set.len(),
                    graph.display_name(&source),
                    graph.display_name(&destination)
                );
            }
            for (i, route) in set.routes.iter().enumerate() {
                println!("  {}. {} ({})", i + 1, route_line(graph, route), route.distance);
            }
            if set.truncated && !cli.quiet {
                println!("(stopped after {} routes; more may exist)", set.len());
            }
        }
    )
}
