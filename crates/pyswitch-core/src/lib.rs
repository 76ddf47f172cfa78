// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use descriptor::Family;
use error::{Error, Result};

pub mod arch;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod os_environment;

pub const DEFAULT_LOCATE_PROGRAM: &str = "locate";
/// What gets handed to `locate`, every interpreter lives in some `bin` directory.
pub const DEFAULT_LOCATE_QUERY: &str = "bin/python";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Relative to the users home directory, `.sh` and `.fish` get appended.
pub const DEFAULT_OUTFILE_BASENAME: &str = ".python_switchers";

/// Maps a fragment of an interpreter path to the family of the installation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRule {
    pub fragment: String,
    pub family: Family,
    #[serde(default)]
    pub case_insensitive: bool,
}

impl FamilyRule {
    pub fn new(fragment: &str, family: Family, case_insensitive: bool) -> Self {
        FamilyRule {
            fragment: fragment.to_string(),
            family,
            case_insensitive,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.case_insensitive {
            path.to_lowercase().contains(&self.fragment.to_lowercase())
        } else {
            path.contains(&self.fragment)
        }
    }

    /// Built-in rules, order matters as the first match wins.
    pub fn defaults() -> Vec<FamilyRule> {
        vec![
            FamilyRule::new(
                "/System/Library/Frameworks/Python.framework",
                Family::System,
                false,
            ),
            FamilyRule::new("/Library/Frameworks/Python.framework", Family::MacPython, false),
            FamilyRule::new("miniconda", Family::Miniconda, true),
            FamilyRule::new("anaconda", Family::Anaconda, true),
            FamilyRule::new("/epd", Family::Epd, true),
            FamilyRule::new("enthought", Family::Epd, true),
            FamilyRule::new("/.pyenv/versions/", Family::Pyenv, false),
            FamilyRule::new("/Cellar/", Family::Homebrew, false),
            FamilyRule::new("/linuxbrew/", Family::Homebrew, false),
            FamilyRule::new("/usr/", Family::System, false),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Regular expressions, a path matching any of them is never considered.
    pub excluded_patterns: Vec<String>,
    /// Tried before the built-in family rules.
    pub family_rules: Vec<FamilyRule>,
    pub locate_program: String,
    pub locate_query: String,
    /// Upper bound for each external command (index query & version queries).
    pub timeout_ms: u64,
    /// Output files are `<basename>.sh` and `<basename>.fish`.
    pub outfile_basename: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            excluded_patterns: vec![
                ".*virtualenv.*".to_string(),
                ".*pkgs.*".to_string(),
                ".*anaconda/envs.*".to_string(),
            ],
            family_rules: vec![],
            locate_program: DEFAULT_LOCATE_PROGRAM.to_string(),
            locate_query: DEFAULT_LOCATE_QUERY.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            outfile_basename: None,
        }
    }
}

impl Configuration {
    /// Loads a JSON configuration file, anything not in the file keeps its default.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| Error::InvalidConfig {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|err| Error::InvalidConfig {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Configured rules followed by the built-in ones.
    pub fn effective_family_rules(&self) -> Vec<FamilyRule> {
        let mut rules = self.family_rules.clone();
        rules.extend(FamilyRule::defaults());
        rules
    }
}

/// A searchable index of the file system, such as the `locate` database.
pub trait FileIndex {
    /// Name used in log messages and errors.
    fn name(&self) -> String;
    /// Returns every indexed path matching the query.
    fn query(&self, query: &str) -> Result<Vec<PathBuf>>;
}

/// Asks an interpreter for its version banner (`python -V`).
pub trait VersionProbe {
    /// Returns the raw banner, e.g. `Python 2.7.5 :: Anaconda 1.6.1 (x86_64)`.
    /// None if the interpreter could not be run, failed or took too long.
    fn query_version(&self, executable: &Path) -> Option<String>;
}
