//! Command dispatch logic for campus

use std::path::{Path, PathBuf};
use std::time::Instant;

use campus_core::config::CampusConfig;
use campus_core::dataset::CampusDataset;
use campus_core::error::Result;
use campus_core::graph::LocationGraph;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{graph_info, path, routes, traverse};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: CampusConfig,
    /// File the config was read from, if any
    pub config_path: Option<PathBuf>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let (config, config_path) = load_config(cli.config.as_deref())?;
        debug!(elapsed = ?start.elapsed(), config = ?config_path, "load_config");
        Ok(Self {
            cli,
            config,
            config_path,
            start,
        })
    }

    /// Dataset from `--data`, then the config file, then the bundled campus
    pub fn load_graph(&self) -> Result<LocationGraph> {
        let dataset_path = self
            .cli
            .data
            .clone()
            .or_else(|| self.config.dataset_path(self.config_path.as_deref()));

        let dataset = match dataset_path {
            Some(path) => CampusDataset::load(&path)?,
            None => CampusDataset::default_campus(),
        };
        let graph = dataset.build_graph(self.config.graph.duplicate_walkways)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            locations = graph.location_count(),
            walkways = graph.walkway_count(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// An explicit `--config` must exist; the default location is optional
fn load_config(explicit: Option<&Path>) -> Result<(CampusConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((CampusConfig::load(path)?, Some(path.to_path_buf())));
    }

    CampusConfig::discover()
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_graph()?;
        let cli = ctx.cli;

        match self {
            Commands::Locations => graph_info::execute_locations(cli, &graph),
            Commands::Info => graph_info::execute_info(cli, &graph),
            Commands::Neighbors { location } => traverse::execute_neighbors(cli, &graph, location),
            Commands::Reach { from } => traverse::execute_reach(cli, &graph, from),
            Commands::Explore { from } => traverse::execute_explore(cli, &graph, from),
            Commands::Path { from, to } => path::execute_path(cli, &graph, from, to),
            Commands::Distances { from } => path::execute_distances(cli, &graph, from),
            Commands::Routes(args) => {
                let limits = routes::merge_limits(ctx.config.routes, args);
                routes::execute(cli, &graph, args, limits)
            }
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campus {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Walking routes between campus buildings.");
        println!();
        println!("Run `campus --help` for usage information.");
        Ok(())
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };
    debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}
