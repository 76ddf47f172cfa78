// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref UNIX_EXE: Regex =
        Regex::new(r"^python(\d+(\.\d+)*)?$").expect("error parsing Unix executable regex");
}

/// `python`, `python3`, `python3.12`, but not `python-config`, `pythonw` or `python3.12m-config`.
pub fn is_python_executable_name(exe: &Path) -> bool {
    let name = exe
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default();
    UNIX_EXE.is_match(name)
}

/// Whether an indexed path looks like an interpreter, i.e. an interpreter name inside a `bin` directory.
pub fn is_python_candidate(path: &Path) -> bool {
    is_python_executable_name(path)
        && path
            .parent()
            .and_then(|p| p.file_name())
            .is_some_and(|name| name == "bin")
}
