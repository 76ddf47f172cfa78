// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{collections::HashSet, fmt};

use crate::descriptor::Descriptor;

/// A token made of `[a-z0-9_]` only, safe as a function name suffix in POSIX shells and fish.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn function_name(&self) -> String {
        format!("select_{}", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the identifier of a descriptor, e.g. `macpython_271` or `anaconda_161_x86_64`.
pub fn build(descriptor: &Descriptor) -> Identifier {
    let family = descriptor
        .family
        .to_string()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    let version = descriptor
        .version
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    let mut parts = vec![];
    for part in [family, version] {
        if !part.is_empty() {
            parts.push(part);
        }
    }
    if parts.is_empty() {
        parts.push("python".to_string());
    }
    if let Some(arch) = descriptor.arch {
        parts.push(
            arch.to_string()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect(),
        );
    }
    Identifier(parts.join("_"))
}

/// Gives every descriptor a unique identifier.
/// Clashes are resolved by appending `_2`, `_3`, ... in the order the descriptors are given.
pub fn assign(descriptors: Vec<Descriptor>) -> Vec<(Identifier, Descriptor)> {
    let mut taken = HashSet::new();
    let mut assigned = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let base = build(&descriptor);
        let mut identifier = base.clone();
        let mut counter = 2;
        while taken.contains(&identifier) {
            identifier = Identifier(format!("{base}_{counter}"));
            counter += 1;
        }
        if identifier != base {
            log::trace!(
                "Identifier {} already taken, using {} for {:?}",
                base,
                identifier,
                descriptor.executable
            );
        }
        taken.insert(identifier.clone());
        assigned.push((identifier, descriptor));
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arch::Architecture,
        descriptor::{Candidate, Family},
    };
    use std::path::PathBuf;

    fn descriptor(family: Family, version: &str, exe: &str) -> Descriptor {
        let candidate = Candidate::new(PathBuf::from(exe)).unwrap();
        Descriptor::new(family, version.to_string(), &candidate)
    }

    #[test]
    fn macpython_identifier() {
        let d = descriptor(
            Family::MacPython,
            "2.7.1",
            "/Library/Frameworks/Python.framework/Versions/2.7/bin/python",
        );
        assert_eq!(build(&d).as_str(), "macpython_271");
        assert_eq!(build(&d).function_name(), "select_macpython_271");
    }

    #[test]
    fn architectures_keep_identifiers_apart() {
        let x64 = descriptor(Family::Anaconda, "1.6.1", "/opt/anaconda64/bin/python")
            .arch(Some(Architecture::X86_64));
        let x86 = descriptor(Family::Anaconda, "1.6.1", "/opt/anaconda32/bin/python")
            .arch(Some(Architecture::X86));
        assert_eq!(build(&x64).as_str(), "anaconda_161_x86_64");
        assert_eq!(build(&x86).as_str(), "anaconda_161_x86");
    }

    #[test]
    fn build_is_deterministic() {
        let d = descriptor(Family::Epd, "7.2-2", "/opt/epd/bin/python");
        assert_eq!(build(&d), build(&d.clone()));
        assert_eq!(build(&d).as_str(), "epd_722");
    }

    #[test]
    fn custom_families_are_sanitized() {
        let d = descriptor(
            Family::Custom("Active Python (beta)".to_string()),
            "3.10.0rc1",
            "/opt/active/bin/python",
        );
        assert_eq!(build(&d).as_str(), "activepythonbeta_3100rc1");
    }

    #[test]
    fn collisions_get_numbered_in_encounter_order() {
        let assigned = assign(vec![
            descriptor(Family::System, "2.7.18", "/usr/bin/python"),
            descriptor(Family::System, "2.7.18", "/usr/local/bin/python"),
            descriptor(Family::System, "2.7.18", "/opt/bin/python"),
            descriptor(Family::System, "3.12.1", "/usr/bin/python3"),
        ]);
        let ids = assigned
            .iter()
            .map(|(id, _)| id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["system_2718", "system_2718_2", "system_2718_3", "system_3121"]
        );
        assert_eq!(assigned[1].1.executable, PathBuf::from("/usr/local/bin/python"));
    }

    #[test]
    fn identifiers_only_contain_shell_safe_characters() {
        let d = descriptor(
            Family::Custom("Ünïcode-Py".to_string()),
            "3.13.0+",
            "/opt/x/bin/python",
        )
        .arch(Some(Architecture::Arm64));
        let id = build(&d);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }
}
