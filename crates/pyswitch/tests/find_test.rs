// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod common;

use common::{touch, StubProbe, TestEnvironment};
use pyswitch::find::{find_and_write, outfile_basename};
use pyswitch_core::{error::Error, Configuration};
use pyswitch_locate::index::ListIndex;
use pyswitch_shell::dialect::Dialect;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    home: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    let home = root.join("home").join("me");
    fs::create_dir_all(&home).unwrap();
    Fixture {
        _dir: dir,
        root,
        home,
    }
}

#[test]
fn macpython_switcher_is_written_for_both_shells() {
    let f = fixture();
    let exe = touch(
        &f.root
            .join("Library/Frameworks/Python.framework/Versions/2.7/bin/python"),
    );
    let bin = exe.parent().unwrap().to_string_lossy().to_string();
    let mut probe = StubProbe::default();
    probe.banners.insert(exe.clone(), "Python 2.7.1".to_string());

    let summary = find_and_write(
        &Configuration::default(),
        &ListIndex::from_paths(vec![exe.clone()]),
        Box::new(probe),
        &TestEnvironment {
            home: Some(f.home.clone()),
        },
        false,
    )
    .unwrap();

    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.switchers[0].function_name(), "select_macpython_271");

    let sh = fs::read_to_string(f.home.join(".python_switchers.sh")).unwrap();
    assert!(sh.starts_with(&Dialect::Posix.header()));
    assert!(sh.contains("select_macpython_271()\n{\n"));
    assert!(sh.contains(&format!("export PATH=\"{bin}:${{OLD_PATH}}\"")));
    assert!(sh.contains("export PROMPT_PYTHON_VERSION=\"MacPython 2.7.1\""));

    let fish = fs::read_to_string(f.home.join(".python_switchers.fish")).unwrap();
    assert!(fish.contains("function select_macpython_271\n"));
    assert!(fish.contains(&format!("set -gx PATH \"{bin}\" $OLD_PATH")));
    assert!(fish.contains("set -gx PROMPT_PYTHON_VERSION \"MacPython 2.7.1\""));
}

#[test]
fn nothing_found_still_writes_header_only_files() {
    let f = fixture();
    let summary = find_and_write(
        &Configuration::default(),
        &ListIndex::from_paths(Vec::<PathBuf>::new()),
        Box::new(StubProbe::default()),
        &TestEnvironment {
            home: Some(f.home.clone()),
        },
        false,
    )
    .unwrap();

    assert!(summary.switchers.is_empty());
    for dialect in Dialect::all() {
        let path = f
            .home
            .join(format!(".python_switchers.{}", dialect.extension()));
        assert_eq!(fs::read_to_string(path).unwrap(), dialect.header());
    }
}

#[test]
fn excluded_and_unclassifiable_interpreters_are_left_out() {
    let f = fixture();
    let anaconda = touch(&f.root.join("opt/anaconda/bin/python"));
    let env = touch(&f.root.join("opt/anaconda/envs/py33/bin/python"));
    let venv = touch(&f.root.join("home/me/.virtualenvs/web/bin/python"));
    let broken = touch(&f.root.join("opt/broken/bin/python"));

    let mut probe = StubProbe::default();
    for exe in [&anaconda, &env, &venv] {
        probe.banners.insert(
            exe.clone(),
            "Python 2.7.5 :: Anaconda 1.6.1 (x86_64)".to_string(),
        );
    }

    let summary = find_and_write(
        &Configuration::default(),
        &ListIndex::from_paths(vec![env.clone(), anaconda, venv.clone(), broken]),
        Box::new(probe),
        &TestEnvironment {
            home: Some(f.home.clone()),
        },
        false,
    )
    .unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.unclassified(), 1);
    assert_eq!(summary.switchers.len(), 1);
    assert_eq!(
        summary.switchers[0].function_name(),
        "select_anaconda_161_x86_64"
    );

    let sh = fs::read_to_string(f.home.join(".python_switchers.sh")).unwrap();
    assert!(!sh.contains("/envs/"));
    assert!(!sh.contains(".virtualenvs"));
    assert_eq!(sh.matches("select_").count(), 2); // header mention + one function
}

#[test]
fn dry_run_writes_nothing() {
    let f = fixture();
    let exe = touch(&f.root.join("opt/python/bin/python3"));
    let mut probe = StubProbe::default();
    probe.banners.insert(exe.clone(), "Python 3.12.1".to_string());

    let summary = find_and_write(
        &Configuration::default(),
        &ListIndex::from_paths(vec![exe]),
        Box::new(probe),
        &TestEnvironment {
            home: Some(f.home.clone()),
        },
        true,
    )
    .unwrap();

    assert_eq!(summary.switchers[0].function_name(), "select_python_3121");
    assert!(summary.written.is_empty());
    assert!(!f.home.join(".python_switchers.sh").exists());
}

#[test]
fn dry_run_does_not_need_a_home_directory() {
    let f = fixture();
    let exe = touch(&f.root.join("opt/python/bin/python3"));
    let mut probe = StubProbe::default();
    probe.banners.insert(exe.clone(), "Python 3.12.1".to_string());

    let summary = find_and_write(
        &Configuration::default(),
        &ListIndex::from_paths(vec![exe]),
        Box::new(probe),
        &TestEnvironment { home: None },
        true,
    )
    .unwrap();

    assert_eq!(summary.switchers.len(), 1);
    assert!(summary.written.is_empty());
}

#[test]
fn unknown_home_is_a_write_failure() {
    let config = Configuration::default();
    assert!(matches!(
        outfile_basename(&config, &TestEnvironment { home: None }),
        Err(Error::WriteFailure { .. })
    ));

    let config = Configuration {
        outfile_basename: Some(PathBuf::from("/tmp/switchers")),
        ..Default::default()
    };
    assert_eq!(
        outfile_basename(&config, &TestEnvironment { home: None }).unwrap(),
        PathBuf::from("/tmp/switchers")
    );
}

#[test]
fn unwritable_destination_aborts() {
    let f = fixture();
    let config = Configuration {
        outfile_basename: Some(f.root.join("missing-dir").join(".python_switchers")),
        ..Default::default()
    };
    match find_and_write(
        &config,
        &ListIndex::from_paths(Vec::<PathBuf>::new()),
        Box::new(StubProbe::default()),
        &TestEnvironment {
            home: Some(f.home.clone()),
        },
        false,
    ) {
        Err(Error::WriteFailure { path, .. }) => {
            assert_eq!(path, f.root.join("missing-dir").join(".python_switchers.sh"))
        }
        Err(err) => panic!("expected WriteFailure, got {err}"),
        Ok(_) => panic!("expected WriteFailure"),
    }
}
