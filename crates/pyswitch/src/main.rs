// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, log_enabled, Level};
use pyswitch::{find_and_write_stdio, FindOptions};

/// Detects all Python installations and writes shell functions
/// (~/.python_switchers.sh & ~/.python_switchers.fish) to switch between them.
///
/// Relies on the locate database, keep it fresh with `updatedb`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Regular expression of paths to ignore, in addition to the configured ones.
    /// Use as many as needed.
    #[arg(short, long = "excluded-pattern", value_name = "REGEX")]
    excluded_patterns: Vec<String>,

    /// Output file basename, without extension, for the generated shell functions
    /// (defaults to $HOME/.python_switchers).
    #[arg(short, long, value_name = "PATH")]
    outfile_basename: Option<PathBuf>,

    /// Only show the detected installations, don't write the shell files.
    #[arg(short, long)]
    dry_run: bool,

    /// JSON configuration file (exclusion patterns, family rules, timeouts).
    #[arg(short, long, value_name = "FILE", env = "PYSWITCH_CONFIG")]
    config: Option<PathBuf>,

    /// File listing candidate paths, one per line, used instead of the locate database.
    #[arg(long, value_name = "FILE")]
    index_file: Option<PathBuf>,

    /// Program used to query the file index.
    #[arg(long, value_name = "PROGRAM", env = "PYSWITCH_LOCATE")]
    locate_program: Option<String>,

    /// Upper bound for the index query and every version query.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Display verbose output (defaults to warnings).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match find_and_write_stdio(FindOptions {
        config: cli.config,
        excluded_patterns: cli.excluded_patterns,
        outfile_basename: cli.outfile_basename,
        index_file: cli.index_file,
        locate_program: cli.locate_program,
        timeout_ms: cli.timeout_ms,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // PYSWITCH_LOG=off silences the logger.
            if log_enabled!(Level::Error) {
                error!("{}", err);
            } else {
                eprintln!("Error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}
