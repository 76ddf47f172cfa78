// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use pyswitch_fs::path::get_user_home;

pub trait Environment {
    fn get_user_home(&self) -> Option<PathBuf>;
}

#[derive(Default)]
pub struct EnvironmentApi {}

impl EnvironmentApi {
    pub fn new() -> Self {
        EnvironmentApi {}
    }
}

impl Environment for EnvironmentApi {
    fn get_user_home(&self) -> Option<PathBuf> {
        get_user_home()
    }
}
