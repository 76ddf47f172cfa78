// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pyswitch_core::{os_environment::Environment, VersionProbe};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

pub struct TestEnvironment {
    pub home: Option<PathBuf>,
}

impl Environment for TestEnvironment {
    fn get_user_home(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Version banners keyed by executable, anything else fails like a broken interpreter.
#[derive(Default)]
pub struct StubProbe {
    pub banners: HashMap<PathBuf, String>,
}

impl VersionProbe for StubProbe {
    fn query_version(&self, executable: &Path) -> Option<String> {
        self.banners.get(executable).cloned()
    }
}

#[allow(dead_code)]
pub fn touch(path: &Path) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
    path.to_path_buf()
}
