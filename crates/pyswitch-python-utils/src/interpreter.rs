// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{trace, warn};
use pyswitch_core::VersionProbe;
use std::{path::Path, time::Duration};

use crate::process::run_with_timeout;

/// Runs `<python> -V`.
/// Python 2 prints the banner on stderr, Python 3 on stdout, hence both are read.
pub struct InterpreterProbe {
    timeout: Duration,
}

impl InterpreterProbe {
    pub fn new(timeout: Duration) -> Self {
        InterpreterProbe { timeout }
    }
}

impl VersionProbe for InterpreterProbe {
    fn query_version(&self, executable: &Path) -> Option<String> {
        trace!("Executing Python: {:?} -V", executable);
        match run_with_timeout(executable, &["-V"], self.timeout) {
            Ok(output) if output.status.success() => {
                let banner = format!("{}\n{}", output.stdout.trim(), output.stderr.trim());
                let banner = banner.trim();
                if banner.is_empty() {
                    warn!("Python {:?} printed no version", executable);
                    None
                } else {
                    Some(banner.to_string())
                }
            }
            Ok(output) => {
                warn!(
                    "Python {:?} -V failed with {}: {}",
                    executable,
                    output.status,
                    output.stderr.trim()
                );
                None
            }
            Err(err) => {
                warn!("Failed to execute Python {:?}: {}", executable, err);
                None
            }
        }
    }
}
