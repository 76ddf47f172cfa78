// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{trace, LevelFilter};
use pyswitch_core::{
    error::Result, os_environment::EnvironmentApi, Configuration, FileIndex,
};
use pyswitch_locate::index::{ListIndex, LocateIndex};
use pyswitch_python_utils::interpreter::InterpreterProbe;
use pyswitch_shell::stdio;
use std::path::PathBuf;

pub mod find;

#[derive(Debug, Default, Clone)]
pub struct FindOptions {
    /// JSON configuration file.
    pub config: Option<PathBuf>,
    /// Appended to the configured exclusion patterns.
    pub excluded_patterns: Vec<String>,
    pub outfile_basename: Option<PathBuf>,
    /// Read candidate paths from this file instead of querying `locate`.
    pub index_file: Option<PathBuf>,
    pub locate_program: Option<String>,
    pub timeout_ms: Option<u64>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Defaults, overridden by the configuration file, overridden by the command line.
pub fn build_configuration(options: &FindOptions) -> Result<Configuration> {
    let mut config = match &options.config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::default(),
    };
    config
        .excluded_patterns
        .extend(options.excluded_patterns.iter().cloned());
    if let Some(basename) = &options.outfile_basename {
        config.outfile_basename = Some(basename.clone());
    }
    if let Some(program) = &options.locate_program {
        config.locate_program = program.clone();
    }
    if let Some(timeout_ms) = options.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    trace!("Configuration: {:?}", config);
    Ok(config)
}

pub fn find_and_write_stdio(options: FindOptions) -> Result<()> {
    stdio::initialize_logger(if options.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    });

    let config = build_configuration(&options)?;
    let index: Box<dyn FileIndex> = match &options.index_file {
        Some(path) => Box::new(ListIndex::from_file(path.clone())?),
        None => Box::new(LocateIndex::new(
            config.locate_program.clone(),
            config.timeout(),
        )),
    };
    println!(
        "--- Searching all installed pythons, except those that match: {:?}",
        config.excluded_patterns
    );

    let summary = find::find_and_write(
        &config,
        index.as_ref(),
        Box::new(InterpreterProbe::new(config.timeout())),
        &EnvironmentApi::new(),
        options.dry_run,
    )?;

    println!(
        "--- Found {} interpreters ({} could not be identified).",
        summary.switchers.len(),
        summary.unclassified()
    );
    stdio::print_switchers(&summary.switchers);
    if options.dry_run {
        println!("--- Dry run, nothing written.");
    } else {
        println!("--- Selectors saved to {:?}", summary.written);
        println!(
            "--- Set OLD_PATH=\"$PATH\" and source the generated file from your .bashrc, .zshrc or config.fish."
        );
    }
    println!("Completed in {}ms", summary.total.as_millis());
    Ok(())
}
