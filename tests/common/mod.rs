//! # Harness test fixtures
//!
//! Integration tests use `/bin/sh` as the compiler under test: the fixture is
//! fed on stdin, so each fixture file is a tiny shell script that decides its
//! own exit code.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const SHELL: &str = "/bin/sh";

/// Creates a fixture root holding `files` (relative path, contents).
pub fn fixture_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create fixture dir");
    for (path, contents) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create fixture subdir");
        }
        fs::write(full, contents).expect("write fixture");
    }
    dir
}

/// A fixture script that appends `tag` to `log` and exits with `code`.
pub fn logging_script(log: &Path, tag: &str, code: i32) -> String {
    format!("echo {tag} >> '{}'\nexit {code}\n", log.display())
}

/// Lines appended to `log` by [`logging_script`] fixtures, in order.
pub fn read_log(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
