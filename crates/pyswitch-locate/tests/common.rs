// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// Writes an executable shell script standing in for `locate`.
pub fn fake_locate(dir: &Path, name: &str, body: &str) -> String {
    fs::create_dir_all(dir).unwrap();
    let exe = dir.join(name);
    fs::write(&exe, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
    exe.to_string_lossy().to_string()
}

pub fn touch(path: &Path) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
    path.to_path_buf()
}
