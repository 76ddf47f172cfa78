// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::{fs, path::Path};

lazy_static! {
    static ref ANACONDA_VERSION: Regex = Regex::new(r"^anaconda-(\d[\w.]*)-.*\.json$")
        .expect("error parsing Version regex for Anaconda Package Version in conda");
}

/// Every conda installation (base or environment) has a `conda-meta` directory.
pub fn is_conda_install(prefix: &Path) -> bool {
    prefix.join("conda-meta").is_dir()
}

/// Anaconda installs ship the `anaconda` meta package, e.g. `conda-meta/anaconda-1.6.1-np17py27_0.json`.
/// Miniconda installs do not.
pub fn get_anaconda_version(prefix: &Path) -> Option<String> {
    let mut names = fs::read_dir(prefix.join("conda-meta"))
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    let version = names
        .iter()
        .find_map(|name| ANACONDA_VERSION.captures(name))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string());
    trace!("Anaconda version in {:?}: {:?}", prefix, version);
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn anaconda_meta_package() {
        let prefix = TempDir::new().unwrap();
        let meta = prefix.path().join("conda-meta");
        fs::create_dir_all(&meta).unwrap();
        fs::write(meta.join("python-2.7.5-1.json"), "{}").unwrap();
        fs::write(meta.join("anaconda-1.6.1-np17py27_0.json"), "{}").unwrap();
        fs::write(meta.join("history"), "").unwrap();

        assert!(is_conda_install(prefix.path()));
        assert_eq!(get_anaconda_version(prefix.path()), Some("1.6.1".to_string()));
    }

    #[test]
    fn miniconda_has_no_meta_package() {
        let prefix = TempDir::new().unwrap();
        let meta = prefix.path().join("conda-meta");
        fs::create_dir_all(&meta).unwrap();
        fs::write(meta.join("conda-23.7.4-py311h06a4308_0.json"), "{}").unwrap();
        fs::write(meta.join("anaconda-client-1.12.0-py311_0.json"), "{}").unwrap();

        assert!(is_conda_install(prefix.path()));
        assert_eq!(get_anaconda_version(prefix.path()), None);
    }

    #[test]
    fn not_a_conda_install() {
        let prefix = TempDir::new().unwrap();
        assert!(!is_conda_install(prefix.path()));
        assert_eq!(get_anaconda_version(prefix.path()), None);
    }
}
