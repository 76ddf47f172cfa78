// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::trace;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

// Resolves symlinks (including symlinked parent directories) to the real file.
// If the real file == path, then it is not a symlink and None is returned.
pub fn resolve_symlink<T: AsRef<Path>>(path: &T) -> Option<PathBuf> {
    let path = path.as_ref();
    // Running readlink for a path thats not a symlink ends up returning relative paths for some reason.
    // Hence canonicalize, which always hands back an absolute path.
    match fs::canonicalize(path) {
        Ok(resolved) if resolved != path => Some(resolved),
        Ok(_) => None,
        Err(err) => {
            trace!("Failed to resolve {:?}: {}", path, err);
            None
        }
    }
}

/// The real location of a file, or the path itself if it cannot be resolved
/// (e.g. broken symlink, permission denied on a parent directory).
pub fn real_path<T: AsRef<Path>>(path: &T) -> PathBuf {
    resolve_symlink(path).unwrap_or_else(|| path.as_ref().to_path_buf())
}

/// Expands a leading `~` as well as `${HOME}`/`$HOME` and `${USER}` references.
pub fn expand_path(path: PathBuf) -> PathBuf {
    if path.starts_with("~") {
        if let Some(ref home) = get_user_home() {
            if let Ok(path) = path.strip_prefix("~") {
                return home.join(path);
            } else {
                return path;
            }
        }
    }

    let value = path.to_string_lossy();
    if value.contains("${HOME}") || value.contains("$HOME") || value.contains("${USER}") {
        let username = env::var("USER")
            .or(env::var("USERNAME"))
            .unwrap_or_default();
        let home = get_user_home()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        return PathBuf::from(
            value
                .replace("${HOME}", &home)
                .replace("$HOME", &home)
                .replace("${USER}", &username),
        );
    }
    path
}

pub fn get_user_home() -> Option<PathBuf> {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => None,
    }
}
