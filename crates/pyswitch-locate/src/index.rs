// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{trace, warn};
use pyswitch_core::{
    error::{Error, Result},
    FileIndex,
};
use pyswitch_python_utils::process::run_with_timeout;
use std::{fs, io, path::PathBuf, time::Duration};

/// The `locate` database, kept fresh by `updatedb` (or `locate.updatedb` on macOS) outside of this tool.
pub struct LocateIndex {
    program: String,
    timeout: Duration,
}

impl LocateIndex {
    pub fn new(program: String, timeout: Duration) -> Self {
        LocateIndex { program, timeout }
    }
}

impl FileIndex for LocateIndex {
    fn name(&self) -> String {
        self.program.clone()
    }

    fn query(&self, query: &str) -> Result<Vec<PathBuf>> {
        let unavailable = |reason: String| Error::IndexUnavailable {
            program: self.program.clone(),
            reason,
        };
        let output = run_with_timeout(&self.program, &[query], self.timeout).map_err(|err| {
            match err.kind() {
                io::ErrorKind::NotFound => unavailable("program not found".to_string()),
                _ => unavailable(err.to_string()),
            }
        })?;

        let stderr = output.stderr.trim();
        // `locate` exits with 1 when nothing matched, stale database warnings included.
        if !output.status.success() && output.status.code() != Some(1) {
            return Err(unavailable(if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr.to_string()
            }));
        }
        if !stderr.is_empty() {
            warn!("{}: {}", self.program, stderr);
        }
        let paths = parse_lines(&output.stdout, query);
        trace!(
            "{} returned {} paths for {:?}",
            self.program,
            paths.len(),
            query
        );
        Ok(paths)
    }
}

/// A plain list of paths, one per line. Stands in for the locate database.
pub struct ListIndex {
    name: String,
    contents: String,
}

impl ListIndex {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|err| Error::IndexUnavailable {
            program: path.to_string_lossy().to_string(),
            reason: err.to_string(),
        })?;
        Ok(ListIndex {
            name: path.to_string_lossy().to_string(),
            contents,
        })
    }

    pub fn from_paths<P: Into<PathBuf>>(paths: Vec<P>) -> Self {
        let contents = paths
            .into_iter()
            .map(|p| p.into().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        ListIndex {
            name: "path list".to_string(),
            contents,
        }
    }
}

impl FileIndex for ListIndex {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn query(&self, query: &str) -> Result<Vec<PathBuf>> {
        Ok(parse_lines(&self.contents, query))
    }
}

// Same semantics as `locate <query>`, a substring match on the full path.
fn parse_lines(contents: &str, query: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains(query))
        .map(PathBuf::from)
        .collect()
}
