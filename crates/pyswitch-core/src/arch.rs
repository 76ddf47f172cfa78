// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Architecture {
    X86_64,
    X86,
    Arm64,
    Ppc,
}

impl Architecture {
    /// Maps a single token such as `x86_64`, `i386` or `aarch64` to an architecture.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" | "64-bit" | "64bit" => Some(Architecture::X86_64),
            "x86" | "i386" | "i686" | "32-bit" | "32bit" => Some(Architecture::X86),
            "arm64" | "aarch64" => Some(Architecture::Arm64),
            "ppc" | "ppc64" | "powerpc" => Some(Architecture::Ppc),
            _ => None,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Architecture::X86_64 => "x86_64",
            Architecture::X86 => "x86",
            Architecture::Arm64 => "arm64",
            Architecture::Ppc => "ppc",
        })
    }
}
