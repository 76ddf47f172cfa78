// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::trace;
use pyswitch_core::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Directory fragments of virtual environments & package caches, compared case-insensitively.
const VIRTUALENV_MARKERS: &[&str] = &[
    "virtualenv",
    "/envs/",
    "/.venv/",
    "/venv/",
    "/pkgs/",
    "/.tox/",
    "/.nox/",
];

pub struct Exclusions {
    patterns: Vec<Regex>,
}

impl Exclusions {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Exclusions { patterns })
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let value = path.to_string_lossy();
        if let Some(pattern) = self.patterns.iter().find(|p| p.is_match(&value)) {
            trace!("Excluding {:?}, matches {:?}", path, pattern.as_str());
            return true;
        }
        if is_virtualenv(path) {
            trace!("Excluding {:?}, part of a virtual environment", path);
            return true;
        }
        false
    }
}

/// Whether the interpreter belongs to a virtual environment, judging by its path or a `pyvenv.cfg` next to `bin`.
pub fn is_virtualenv(path: &Path) -> bool {
    let value = path.to_string_lossy().to_lowercase();
    if VIRTUALENV_MARKERS.iter().any(|m| value.contains(m)) {
        return true;
    }
    path.parent()
        .and_then(Path::parent)
        .is_some_and(|prefix| prefix.join("pyvenv.cfg").is_file())
}
