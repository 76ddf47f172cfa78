// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::info;
use pyswitch_core::error::{Error, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{dialect::Dialect, switcher::SwitcherFunction};

/// `<basename>.sh` or `<basename>.fish`, the basename itself may already contain dots.
pub fn output_path(basename: &Path, dialect: Dialect) -> PathBuf {
    let mut path = basename.as_os_str().to_owned();
    path.push(".");
    path.push(dialect.extension());
    PathBuf::from(path)
}

/// Header followed by every function, ordered by identifier.
pub fn render_file(dialect: Dialect, switchers: &[SwitcherFunction]) -> String {
    let mut sorted = switchers.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let mut contents = dialect.header();
    for switcher in sorted {
        contents.push_str(&dialect.render(switcher));
    }
    contents
}

/// Overwrites the output file of every dialect, the first failure aborts.
pub fn write_switchers(basename: &Path, switchers: &[SwitcherFunction]) -> Result<Vec<PathBuf>> {
    let mut written = vec![];
    for dialect in Dialect::all() {
        let path = output_path(basename, dialect);
        fs::write(&path, render_file(dialect, switchers)).map_err(|source| {
            Error::WriteFailure {
                path: path.clone(),
                source,
            }
        })?;
        info!("Wrote {} {} switchers to {:?}", switchers.len(), dialect, path);
        written.push(path);
    }
    Ok(written)
}
