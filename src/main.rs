//! Campus - walking routes between campus buildings
//!
//! Loads a campus dataset into the location graph and answers reachability,
//! shortest-path and route-enumeration queries from the command line.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use campus_core::error::{CampusError, ExitCode as CampusExitCode};
use campus_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(CampusExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit(e.exit_code())
        }
    }
}

fn exit(code: CampusExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print an error on stderr in the requested format
fn report(err: &CampusError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
}

/// clap failed before `--format` was parsed; scan argv for it directly
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !argv_format_is_json(std::env::args().skip(1))
    {
        err.exit();
    }

    let campus_error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => CampusError::UsageError(err.to_string()),
        _ => CampusError::Other(err.to_string()),
    };
    report(&campus_error, OutputFormat::Json, false);
    exit(campus_error.exit_code())
}

fn argv_format_is_json(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
