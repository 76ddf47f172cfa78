// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use exclusion::Exclusions;
use log::{info, trace};
use pyswitch_core::{descriptor::Candidate, error::Result, Configuration, FileIndex};
use pyswitch_fs::path::real_path;
use pyswitch_python_utils::executable::is_python_candidate;
use std::{collections::HashMap, path::PathBuf};

pub mod exclusion;
pub mod index;

/// Turns the raw output of a file index into interpreter candidates.
/// This is the only place where exclusion rules are applied.
pub struct Locator {
    exclusions: Exclusions,
    query: String,
}

impl Locator {
    pub fn new(exclusions: Exclusions, query: String) -> Self {
        Locator { exclusions, query }
    }

    pub fn from_config(config: &Configuration) -> Result<Self> {
        Ok(Locator::new(
            Exclusions::new(&config.excluded_patterns)?,
            config.locate_query.clone(),
        ))
    }

    /// Candidates in the order the index reported them, deduplicated on their real path.
    pub fn find(&self, index: &dyn FileIndex) -> Result<Vec<Candidate>> {
        let paths = index.query(&self.query)?;
        info!("{} returned {} paths", index.name(), paths.len());

        let mut candidates: Vec<Candidate> = vec![];
        let mut seen: HashMap<PathBuf, usize> = HashMap::new();
        for path in paths {
            if !path.is_absolute() || !is_python_candidate(&path) {
                continue;
            }
            // Follows symlinks, stale index entries & broken links drop out here.
            if !path.is_file() {
                trace!("Ignoring {:?}, not an existing file", path);
                continue;
            }
            if self.exclusions.is_excluded(&path) {
                continue;
            }
            let executable = real_path(&path);
            if executable != path && self.exclusions.is_excluded(&executable) {
                continue;
            }

            if let Some(existing) = seen.get(&executable) {
                trace!("{:?} is another link to {:?}", path, executable);
                candidates[*existing].symlinks.push(path);
                continue;
            }
            if let Some(mut candidate) = Candidate::new(executable.clone()) {
                candidate.symlinks.push(path);
                seen.insert(executable, candidates.len());
                candidates.push(candidate);
            }
        }
        Ok(candidates)
    }
}
