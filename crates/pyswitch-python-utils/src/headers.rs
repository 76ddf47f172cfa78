// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use regex::Regex;
use std::{fs, path::Path};

lazy_static! {
    static ref VERSION: Regex = Regex::new(r#"#define\s+PY_VERSION\s+"((\d+\.?)*.*)""#)
        .expect("error parsing Version regex for patchlevel.h");
}

// Get the python version from the `<sys prefix>/include/patchlevel.h` file
// (or `include/python2.7/patchlevel.h`, `Headers/patchlevel.h` in frameworks).
// The line we are looking for is:
// #define PY_VERSION              "3.10.2"
//
// Prefixes such as `/usr` can hold headers of several versions, `exe_version` is the
// version in the executable name (`3.12` for `python3.12`, empty for `python`) and
// must select exactly one of the `include/python*` directories.
pub fn get_version(prefix: &Path, exe_version: &str) -> Option<String> {
    let mut prefix = prefix.to_path_buf();
    if prefix.ends_with("bin") {
        prefix.pop();
    }
    for headers_path in [prefix.join("Headers"), prefix.join("include")] {
        let mut contents = fs::read_to_string(headers_path.join("patchlevel.h")).ok();
        if contents.is_none() {
            if let Ok(readdir) = fs::read_dir(&headers_path) {
                let dirs = readdir
                    .filter_map(Result::ok)
                    .map(|d| d.path())
                    .filter(|p| {
                        p.file_name()
                            .and_then(|n| n.to_str())
                            .and_then(|n| n.strip_prefix("python"))
                            .is_some_and(|v| version_matches(v, exe_version))
                    })
                    .collect::<Vec<_>>();
                if let [dir] = dirs.as_slice() {
                    contents = fs::read_to_string(dir.join("patchlevel.h")).ok();
                }
            }
        }
        for line in contents.unwrap_or_default().lines() {
            if let Some(value) = VERSION.captures(line).and_then(|c| c.get(1)) {
                return Some(value.as_str().to_string());
            }
        }
    }
    None
}

// `3.12` matches `3` and `3.12`, but not `3.1`. Trailing ABI flags such as `3.6m` are fine.
fn version_matches(header_version: &str, exe_version: &str) -> bool {
    match header_version.strip_prefix(exe_version) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}
