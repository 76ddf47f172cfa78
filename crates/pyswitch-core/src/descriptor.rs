// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::arch::Architecture;

/// The distribution an interpreter was installed from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Family {
    System,
    MacPython,
    Anaconda,
    Miniconda,
    Epd,
    Homebrew,
    Pyenv,
    /// A plain python.org style build we know nothing else about.
    Python,
    /// Any other name supplied through the family rules of the configuration.
    Custom(String),
}

impl Family {
    /// Distributions that carry their own version number, separate from the interpreter's.
    /// E.g. `Python 2.7.5 :: Anaconda 1.6.1`.
    pub fn has_own_versioning(&self) -> bool {
        matches!(self, Family::Anaconda | Family::Epd)
    }

    pub fn is_conda(&self) -> bool {
        matches!(self, Family::Anaconda | Family::Miniconda)
    }
}

impl From<&str> for Family {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "system" => Family::System,
            "macpython" => Family::MacPython,
            "anaconda" => Family::Anaconda,
            "miniconda" => Family::Miniconda,
            "epd" | "enthought" => Family::Epd,
            "homebrew" => Family::Homebrew,
            "pyenv" => Family::Pyenv,
            "python" => Family::Python,
            _ => Family::Custom(value.trim().to_string()),
        }
    }
}

impl From<String> for Family {
    fn from(value: String) -> Self {
        Family::from(value.as_str())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Family::System => "System",
            Family::MacPython => "MacPython",
            Family::Anaconda => "Anaconda",
            Family::Miniconda => "Miniconda",
            Family::Epd => "EPD",
            Family::Homebrew => "Homebrew",
            Family::Pyenv => "Pyenv",
            Family::Python => "Python",
            Family::Custom(name) => name,
        })
    }
}

/// A path believed to be a Python interpreter, as produced by the locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Real (symlink resolved) path of the executable.
    pub executable: PathBuf,
    /// Directory that gets prepended to `PATH`.
    pub bin_dir: PathBuf,
    /// Paths reported by the index that resolved to `executable`.
    pub symlinks: Vec<PathBuf>,
}

impl Candidate {
    pub fn new(executable: PathBuf) -> Option<Self> {
        let bin_dir = executable.parent()?.to_path_buf();
        Some(Candidate {
            executable,
            bin_dir,
            symlinks: vec![],
        })
    }

    /// The installation root, i.e. the parent of the `bin` directory.
    pub fn prefix(&self) -> Option<&Path> {
        self.bin_dir.parent()
    }
}

/// Everything we know about one installed interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub family: Family,
    /// Distribution version for families with their own versioning, else the interpreter version.
    pub version: String,
    /// Interpreter version, only when it differs from `version`.
    pub python_version: Option<String>,
    pub arch: Option<Architecture>,
    pub bin_dir: PathBuf,
    pub executable: PathBuf,
}

impl Descriptor {
    pub fn new(family: Family, version: String, candidate: &Candidate) -> Self {
        Descriptor {
            family,
            version,
            python_version: None,
            arch: None,
            bin_dir: candidate.bin_dir.clone(),
            executable: candidate.executable.clone(),
        }
    }

    pub fn arch(mut self, arch: Option<Architecture>) -> Self {
        self.arch = arch;
        self
    }

    pub fn python_version(mut self, python_version: Option<String>) -> Self {
        self.python_version = python_version.filter(|v| *v != self.version);
        self
    }

    /// Value of the prompt variable, `<Family> <Version>` with the architecture when known.
    pub fn label(&self) -> String {
        match self.arch {
            Some(arch) => format!("{} {} ({})", self.family, self.version, arch),
            None => format!("{} {}", self.family, self.version),
        }
    }

    /// Longer, human readable description echoed when switching.
    pub fn description(&self) -> String {
        let arch = self.arch.map(|a| format!(" ({a})")).unwrap_or_default();
        match (&self.family, &self.python_version) {
            (Family::Python, _) => format!("Python {}{}", self.version, arch),
            (family, Some(python)) => {
                format!("Python {} -- {} {}{}", python, family, self.version, arch)
            }
            (family, None) if family.has_own_versioning() => {
                format!("{} {}{}", family, self.version, arch)
            }
            (family, None) => format!("Python {} -- {}{}", self.version, family, arch),
        }
    }
}
