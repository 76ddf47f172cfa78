// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use pyswitch_core::{arch::Architecture, descriptor::Family};
use regex::Regex;

lazy_static! {
    static ref BANNER: Regex =
        Regex::new(r"^Python\s+(\d+(?:\.\d+)*[A-Za-z0-9+]*)\s*(?:(?:::|--|\|)\s*(.*))?$")
            .expect("error parsing version banner regex");
    static ref PARENTHESIZED: Regex =
        Regex::new(r"\(([^)]*)\)").expect("error parsing parenthesized regex");
    static ref DISTRIBUTION: Regex =
        Regex::new(r"^([A-Za-z][A-Za-z]*)[\s,]*(\d+(?:[.\-]\d+)*)?")
            .expect("error parsing distribution regex");
    static ref VERSION_IN_PATH: Regex =
        Regex::new(r"^\d+\.\d+\.\d+$").expect("error parsing path version regex");
}

/// What `python -V` tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBanner {
    pub python_version: String,
    /// Distribution named after the interpreter version, with its own version when printed.
    pub distribution: Option<(Family, Option<String>)>,
    pub arch: Option<Architecture>,
}

/// Parses banners such as
/// `Python 2.7.1`, `Python 2.7.5 :: Anaconda 1.6.1 (x86_64)` or `Python 2.7.2 -- EPD 7.2-2 (64-bit)`.
pub fn parse_banner(output: &str) -> Option<VersionBanner> {
    let captures = output
        .lines()
        .map(str::trim)
        .find_map(|line| BANNER.captures(line))?;
    let python_version = captures.get(1)?.as_str().to_string();
    let rest = captures.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

    let arch = PARENTHESIZED
        .captures_iter(rest)
        .filter_map(|c| c.get(1))
        .find_map(|m| Architecture::from_token(m.as_str().trim()));
    let without_parens = PARENTHESIZED.replace_all(rest, "");
    let distribution = DISTRIBUTION
        .captures(without_parens.trim())
        .and_then(|c| {
            let name = c.get(1)?.as_str();
            let family = match name.to_lowercase().as_str() {
                // Older Anaconda builds print `Continuum Analytics, Inc.`
                "continuum" => Family::Anaconda,
                "enthought" => Family::Epd,
                _ => Family::from(name),
            };
            Some((family, c.get(2).map(|m| m.as_str().to_string())))
        });

    Some(VersionBanner {
        python_version,
        distribution,
        arch,
    })
}

/// Picks up versions embedded in install locations such as `~/.pyenv/versions/3.11.4/bin/python`.
/// Only full `X.Y.Z` components count, `Versions/2.7` is not precise enough.
pub fn from_path_components(path: &std::path::Path) -> Option<String> {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .filter(|c| VERSION_IN_PATH.is_match(c))
        .last()
        .map(str::to_string)
}
