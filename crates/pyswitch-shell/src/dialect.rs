// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::switcher::{SwitcherFunction, BASE_PATH_VARIABLE, PROMPT_VARIABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// bash, zsh & other POSIX compatible shells.
    Posix,
    Fish,
}

impl Dialect {
    pub fn all() -> [Dialect; 2] {
        [Dialect::Posix, Dialect::Fish]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::Posix => "sh",
            Dialect::Fish => "fish",
        }
    }

    /// Comment block at the top of every generated file, documenting what the integrator has to do.
    pub fn header(&self) -> String {
        let (seed, source) = match self {
            Dialect::Posix => (
                format!("export {BASE_PATH_VARIABLE}=\"$PATH\""),
                "source ~/.python_switchers.sh",
            ),
            Dialect::Fish => (
                format!("set -gx {BASE_PATH_VARIABLE} $PATH"),
                "source ~/.python_switchers.fish",
            ),
        };
        format!(
            "# Python switchers, generated by pyswitch. Re-run pyswitch instead of editing this file.\n\
             #\n\
             # Source this file after all other PATH changes, capturing PATH first:\n\
             #\n\
             #     {seed}\n\
             #     {source}\n\
             #\n\
             # Each select_* function puts one interpreter in front of ${BASE_PATH_VARIABLE}\n\
             # and sets {PROMPT_VARIABLE} for use in the prompt.\n\n"
        )
    }

    pub fn render(&self, switcher: &SwitcherFunction) -> String {
        let bin_dir = switcher.bin_dir.to_string_lossy();
        let echo = format!("Setting environment for {}", switcher.description);
        match self {
            Dialect::Posix => format!(
                "{name}()\n{{\n    echo {echo}\n    export PATH={path}\n    export {PROMPT_VARIABLE}={label}\n}}\n\n",
                name = switcher.function_name(),
                echo = quote_posix(&echo),
                path = quote_posix_with_base(&bin_dir),
                label = quote_posix(&switcher.label),
            ),
            Dialect::Fish => format!(
                "function {name}\n    echo {echo}\n    set -gx PATH {path} ${BASE_PATH_VARIABLE}\n    set -gx {PROMPT_VARIABLE} {label}\nend\n\n",
                name = switcher.function_name(),
                echo = quote_fish(&echo),
                path = quote_fish(&bin_dir),
                label = quote_fish(&switcher.label),
            ),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Dialect::Posix => "posix",
            Dialect::Fish => "fish",
        })
    }
}

fn escape(value: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn quote_posix(value: &str) -> String {
    format!("\"{}\"", escape(value, &['\\', '"', '$', '`']))
}

// `"<dir>:${OLD_PATH}"`, the base variable has to stay expandable.
fn quote_posix_with_base(dir: &str) -> String {
    format!(
        "\"{}:${{{BASE_PATH_VARIABLE}}}\"",
        escape(dir, &['\\', '"', '$', '`'])
    )
}

pub fn quote_fish(value: &str) -> String {
    format!("\"{}\"", escape(value, &['\\', '"', '$']))
}
