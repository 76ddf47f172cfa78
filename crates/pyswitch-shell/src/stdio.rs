// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use env_logger::Builder;
use log::LevelFilter;

use crate::switcher::SwitcherFunction;

pub fn initialize_logger(log_level: LevelFilter) {
    Builder::new()
        .filter(None, log_level)
        .parse_env("PYSWITCH_LOG")
        .init();
}

/// One line per switcher: description, function name and interpreter path.
pub fn print_switchers(switchers: &[SwitcherFunction]) {
    for switcher in switchers {
        println!(
            "--- {:<50} {:<40} (path: {})",
            switcher.description,
            format!("{}()", switcher.function_name()),
            switcher.executable.display()
        );
    }
}
