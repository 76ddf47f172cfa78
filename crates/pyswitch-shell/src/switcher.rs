// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pyswitch_core::{descriptor::Descriptor, identifier::Identifier};
use std::path::PathBuf;

/// Environment variable the prompt configuration reads.
pub const PROMPT_VARIABLE: &str = "PROMPT_PYTHON_VERSION";
/// Captured by the integrator before sourcing, `PATH` is rebuilt on top of it.
pub const BASE_PATH_VARIABLE: &str = "OLD_PATH";

/// One generated `select_*` function, independent of the shell dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherFunction {
    pub identifier: Identifier,
    pub bin_dir: PathBuf,
    pub label: String,
    pub description: String,
    pub executable: PathBuf,
}

impl SwitcherFunction {
    pub fn new(identifier: Identifier, descriptor: &Descriptor) -> Self {
        SwitcherFunction {
            identifier,
            bin_dir: descriptor.bin_dir.clone(),
            label: descriptor.label(),
            description: descriptor.description(),
            executable: descriptor.executable.clone(),
        }
    }

    pub fn function_name(&self) -> String {
        self.identifier.function_name()
    }
}
