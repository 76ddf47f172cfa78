// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{info, trace};
use pyswitch_classify::Classifier;
use pyswitch_core::{
    error::{Error, Result},
    identifier,
    os_environment::Environment,
    Configuration, FileIndex, VersionProbe, DEFAULT_OUTFILE_BASENAME,
};
use pyswitch_fs::path::expand_path;
use pyswitch_locate::Locator;
use pyswitch_shell::{switcher::SwitcherFunction, writer::write_switchers};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{info_span, instrument};

pub struct Summary {
    pub total: Duration,
    pub candidates: usize,
    pub switchers: Vec<SwitcherFunction>,
    /// Empty for dry runs.
    pub written: Vec<PathBuf>,
}

impl Summary {
    pub fn unclassified(&self) -> usize {
        self.candidates - self.switchers.len()
    }
}

/// Locates, classifies & names every interpreter. Functions come back in the order the index reported them.
#[instrument(skip_all)]
pub fn find_switchers(
    configuration: &Configuration,
    index: &dyn FileIndex,
    probe: Box<dyn VersionProbe>,
) -> Result<(usize, Vec<SwitcherFunction>)> {
    let locator = Locator::from_config(configuration)?;
    let candidates = {
        let _span = info_span!("locate_phase", index = %index.name()).entered();
        let start = Instant::now();
        let candidates = locator.find(index)?;
        trace!(
            "Located {} candidates in {:?}",
            candidates.len(),
            start.elapsed()
        );
        candidates
    };

    let descriptors = {
        let _span = info_span!("classify_phase", candidates = candidates.len()).entered();
        let start = Instant::now();
        let classifier = Classifier::new(configuration.effective_family_rules(), probe);
        let descriptors = classifier.classify_all(&candidates);
        trace!(
            "Classified {} of {} candidates in {:?}",
            descriptors.len(),
            candidates.len(),
            start.elapsed()
        );
        descriptors
    };

    let switchers = identifier::assign(descriptors)
        .into_iter()
        .map(|(identifier, descriptor)| SwitcherFunction::new(identifier, &descriptor))
        .collect();
    Ok((candidates.len(), switchers))
}

/// `<home>/.python_switchers` unless configured otherwise.
pub fn outfile_basename(
    configuration: &Configuration,
    environment: &dyn Environment,
) -> Result<PathBuf> {
    if let Some(basename) = &configuration.outfile_basename {
        return Ok(expand_path(basename.clone()));
    }
    match environment.get_user_home() {
        Some(home) => Ok(home.join(DEFAULT_OUTFILE_BASENAME)),
        None => Err(Error::WriteFailure {
            path: PathBuf::from("~").join(DEFAULT_OUTFILE_BASENAME),
            source: io::Error::new(io::ErrorKind::NotFound, "home directory is unknown"),
        }),
    }
}

/// The whole pipeline, writing both files unless `dry_run` is set.
#[instrument(skip(configuration, index, probe, environment))]
pub fn find_and_write(
    configuration: &Configuration,
    index: &dyn FileIndex,
    probe: Box<dyn VersionProbe>,
    environment: &dyn Environment,
    dry_run: bool,
) -> Result<Summary> {
    let start = Instant::now();
    // Resolve the destination first, no point searching if it cannot be written.
    let basename = if dry_run {
        None
    } else {
        Some(outfile_basename(configuration, environment)?)
    };
    let (candidates, switchers) = find_switchers(configuration, index, probe)?;

    let written = match basename {
        Some(basename) => {
            let _span = info_span!("write_phase").entered();
            write_switchers(&basename, &switchers)?
        }
        None => vec![],
    };
    info!(
        "Generated {} switchers from {} candidates in {:?}",
        switchers.len(),
        candidates,
        start.elapsed()
    );
    Ok(Summary {
        total: start.elapsed(),
        candidates,
        switchers,
        written,
    })
}
