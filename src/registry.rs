//! The static suite registry.
//!
//! A [`Registry`] is an ordered list of named [`Suite`]s, each an ordered list
//! of [`Fixture`]s. Everything here is `'static` configuration: nothing is
//! added or removed while the harness runs.

use std::path::{Path, PathBuf};

use crate::status::CompilerStatus;

/// A single input file paired with the exit code the compiler should return
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Path relative to the fixture root.
    pub path: &'static str,
    pub expected: i32,
}

impl Fixture {
    pub const fn new(path: &'static str, expected: CompilerStatus) -> Self {
        Self {
            path,
            expected: expected.code(),
        }
    }

    /// Resolves the fixture against `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.path)
    }
}

/// A named, ordered group of fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suite {
    pub name: &'static str,
    pub fixtures: &'static [Fixture],
}

/// Ordered mapping from suite name to suite.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    suites: &'static [Suite],
}

impl Registry {
    pub const fn new(suites: &'static [Suite]) -> Self {
        Self { suites }
    }

    /// The suites shipped with the harness.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_SUITES)
    }

    pub fn get(&self, name: &str) -> Option<&'static Suite> {
        self.suites.iter().find(|suite| suite.name == name)
    }

    /// Suite names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.suites.iter().map(|suite| suite.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Suite> {
        self.suites.iter()
    }
}

// ============================================================================
// BUILT-IN SUITES
// ============================================================================

const BUILTIN_SUITES: &[Suite] = &[
    Suite {
        name: "ret3",
        fixtures: &[
            Fixture::new("seman_tests/test_ret3_valid_01.zig", CompilerStatus::Ok),
            Fixture::new("seman_tests/test_ret3_invalid_01.zig", CompilerStatus::Undefined),
            Fixture::new("seman_tests/test_ret3_invalid_02.zig", CompilerStatus::Undefined),
            Fixture::new("seman_tests/test_ret3_invalid_03.zig", CompilerStatus::Undefined),
        ],
    },
    Suite {
        name: "ret4",
        fixtures: &[Fixture::new(
            "seman_tests/test_ret4_valid_01.zig",
            CompilerStatus::Ok,
        )],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_keep_registration_order() {
        assert_eq!(Registry::builtin().names(), vec!["ret3", "ret4"]);
    }

    #[test]
    fn lookup_by_name() {
        let registry = Registry::builtin();
        let ret3 = registry.get("ret3").expect("ret3 is registered");
        assert_eq!(ret3.fixtures.len(), 4);
        assert_eq!(ret3.fixtures[0].expected, 0);
        assert!(ret3.fixtures[1..].iter().all(|f| f.expected == 3));
        assert!(registry.get("ret5").is_none());
    }

    #[test]
    fn suite_names_are_unique() {
        let names = Registry::builtin().names();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate suite {name}");
        }
    }

    #[test]
    fn fixtures_resolve_against_root() {
        let fixture = Fixture::new("seman_tests/a.zig", CompilerStatus::Ok);
        assert_eq!(
            fixture.resolve(Path::new("/tmp/assets")),
            PathBuf::from("/tmp/assets/seman_tests/a.zig")
        );
    }
}
