// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to query the file index using '{program}': {reason}. Make sure the locate database exists and is up to date (e.g. run `updatedb`)")]
    IndexUnavailable { program: String, reason: String },

    #[error("unable to classify {executable:?}: {reason}")]
    Unclassifiable { executable: PathBuf, reason: String },

    #[error("failed to write {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
