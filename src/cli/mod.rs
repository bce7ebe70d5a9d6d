//! CLI argument parsing for campus
//!
//! Global flags: --data, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Campus - walking routes between campus buildings
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Campus dataset file (.json, .toml, .yaml); the bundled campus by default
    #[arg(long, global = true, env = "CAMPUS_DATA")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to <config dir>/campus-nav/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress headers and error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every location
    Locations,

    /// Show graph statistics
    Info,

    /// List the walkways leaving a location
    Neighbors {
        /// Location name (case-insensitive)
        location: String,
    },

    /// Locations reachable from a start, breadth-first
    Reach {
        /// Start location
        from: String,
    },

    /// Locations reachable from a start, depth-first
    Explore {
        /// Start location
        from: String,
    },

    /// Shortest walking route between two locations
    Path {
        from: String,
        to: String,
    },

    /// Shortest distance from a start to every reachable location
    Distances {
        /// Start location
        from: String,
    },

    /// Every simple route between two locations
    Routes(RoutesArgs),
}

#[derive(Args, Debug)]
pub struct RoutesArgs {
    pub from: String,

    pub to: String,

    /// Stop after this many routes (overrides the config file)
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Ignore routes with more than this many walkways (overrides the config file)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Order routes by total distance instead of discovery order
    #[arg(long)]
    pub sort: bool,
}
