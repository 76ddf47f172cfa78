// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{trace, warn};
use pyswitch_core::{
    arch::Architecture,
    descriptor::{Candidate, Descriptor, Family},
    error::{Error, Result},
    FamilyRule, VersionProbe,
};
use pyswitch_python_utils::{headers, version};
use std::path::Path;

pub mod conda_meta;

/// Works out the family, version & architecture of a candidate.
/// Paths (and files next to the interpreter) are used first, the interpreter is only executed when they are not enough.
pub struct Classifier {
    rules: Vec<FamilyRule>,
    probe: Box<dyn VersionProbe>,
}

/// What could be learned without running the interpreter.
#[derive(Debug, Default)]
struct PathInfo {
    family: Option<Family>,
    arch: Option<Architecture>,
    python_version: Option<String>,
    distribution_version: Option<String>,
}

impl Classifier {
    pub fn new(rules: Vec<FamilyRule>, probe: Box<dyn VersionProbe>) -> Self {
        Classifier { rules, probe }
    }

    /// Classifies every candidate, those that cannot be classified are logged & dropped.
    pub fn classify_all(&self, candidates: &[Candidate]) -> Vec<Descriptor> {
        candidates
            .iter()
            .filter_map(|candidate| match self.classify(candidate) {
                Ok(descriptor) => Some(descriptor),
                Err(err) => {
                    warn!("{}", err);
                    None
                }
            })
            .collect()
    }

    pub fn classify(&self, candidate: &Candidate) -> Result<Descriptor> {
        let info = self.inspect_paths(candidate);
        trace!("Path inference for {:?}: {:?}", candidate.executable, info);

        let enough = match &info.family {
            Some(family) if family.has_own_versioning() => info.distribution_version.is_some(),
            _ => info.python_version.is_some(),
        };
        if enough {
            return Ok(to_descriptor(candidate, info));
        }

        let banner = match self.probe.query_version(&candidate.executable) {
            Some(output) => version::parse_banner(&output)
                .ok_or_else(|| format!("unrecognized version output {output:?}")),
            None => Err("version query failed".to_string()),
        };
        let banner = match banner {
            Ok(banner) => banner,
            // Fall back to the interpreter version found on disk.
            Err(reason) if info.python_version.is_some() => {
                warn!(
                    "{:?}: {}, using the interpreter version found on disk",
                    candidate.executable, reason
                );
                return Ok(to_descriptor(candidate, info));
            }
            Err(reason) => {
                return Err(Error::Unclassifiable {
                    executable: candidate.executable.clone(),
                    reason,
                })
            }
        };

        let mut info = info;
        if let Some((family, distribution_version)) = banner.distribution {
            if info.family.is_none() {
                info.family = Some(family.clone());
            }
            if info.family.as_ref() == Some(&family) && info.distribution_version.is_none() {
                info.distribution_version = distribution_version;
            }
        }
        info.arch = info.arch.or(banner.arch);
        info.python_version = Some(banner.python_version);
        Ok(to_descriptor(candidate, info))
    }

    fn inspect_paths(&self, candidate: &Candidate) -> PathInfo {
        let paths = std::iter::once(&candidate.executable)
            .chain(candidate.symlinks.iter())
            .map(|p| p.to_string_lossy().to_string())
            .collect::<Vec<_>>();

        let prefix = candidate.prefix();
        let mut family = paths.iter().find_map(|path| {
            self.rules
                .iter()
                .find(|rule| rule.matches(path))
                .map(|rule| rule.family.clone())
        });
        let mut distribution_version = None;
        if let Some(prefix) = prefix {
            if family.as_ref().map_or(true, Family::is_conda)
                && conda_meta::is_conda_install(prefix)
            {
                distribution_version = conda_meta::get_anaconda_version(prefix);
                if family.is_none() {
                    family = Some(if distribution_version.is_some() {
                        Family::Anaconda
                    } else {
                        Family::Miniconda
                    });
                }
            }
        }

        PathInfo {
            family,
            arch: arch_from_path(&candidate.executable),
            python_version: prefix
                .and_then(|prefix| headers::get_version(prefix, &exe_version(candidate)))
                .or_else(|| version::from_path_components(&candidate.executable)),
            distribution_version,
        }
    }
}

// `3.12` for `python3.12`, empty for `python`.
fn exe_version(candidate: &Candidate) -> String {
    candidate
        .executable
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix("python"))
        .unwrap_or_default()
        .to_string()
}

fn arch_from_path(path: &Path) -> Option<Architecture> {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .flat_map(|c| c.split(['-', '.', '@', '+', ' ']))
        .find_map(Architecture::from_token)
}

fn to_descriptor(candidate: &Candidate, info: PathInfo) -> Descriptor {
    let family = info.family.unwrap_or(Family::Python);
    let python_version = info.python_version.unwrap_or_default();
    let version = if family.has_own_versioning() {
        info.distribution_version
            .unwrap_or_else(|| python_version.clone())
    } else {
        python_version.clone()
    };
    Descriptor::new(family, version, candidate)
        .arch(info.arch)
        .python_version(Some(python_version).filter(|v| !v.is_empty()))
}
