//! Exit-code test harness.
//!
//! Runs the compiler under test once per fixture, with the fixture file on
//! its standard input, and checks the process exit code against the value the
//! registry expects.
//!
//! # Execution model
//!
//! For every fixture of a suite, in registration order:
//! 1. **Lookup**: a fixture whose file is missing is skipped; nothing is launched
//! 2. **Invocation**: the [`Subject`] runs once; stdout is discarded, stderr kept
//! 3. **Verdict**: pass iff the actual exit code equals the expected one
//! 4. **Reporting**: the [`Outcome`] goes to the [`Reporter`] and is then dropped
//!
//! Failures of any single fixture, including the compiler failing to start,
//! never stop the run. Only suite selection can fail, and it is resolved
//! before anything is launched.
//!
//! # Example
//!
//! ```rust,no_run
//! use seman_harness::cli::output::TermReporter;
//! use seman_harness::harness::{Orchestrator, ProcessSubject};
//! use seman_harness::registry::Registry;
//!
//! let mut orchestrator = Orchestrator::new(
//!     Registry::builtin(),
//!     ProcessSubject::new("../main"),
//!     TermReporter::new(true),
//!     ".",
//! );
//! let summary = orchestrator.run_all();
//! if !summary.is_success() {
//!     std::process::exit(1);
//! }
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use crate::errors::HarnessError;
use crate::registry::{Fixture, Registry, Suite};

// =============================================================================
// CORE TYPES
// =============================================================================

/// What the compiler did with one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl Invocation {
    pub fn passed(&self, expected: i32) -> bool {
        self.code == Some(expected)
    }
}

/// The classified result of one fixture.
#[derive(Debug)]
pub enum Outcome {
    Pass {
        code: i32,
    },
    Fail {
        expected: i32,
        actual: Option<i32>,
        stderr: String,
    },
    Skipped {
        reason: String,
    },
    Error {
        error: HarnessError,
    },
}

impl Outcome {
    /// Derives the verdict for `fixture` from a finished invocation.
    pub fn classify(fixture: &Fixture, invocation: Invocation) -> Self {
        match invocation.code {
            Some(code) if invocation.passed(fixture.expected) => Outcome::Pass { code },
            actual => Outcome::Fail {
                expected: fixture.expected,
                actual,
                stderr: invocation.stderr,
            },
        }
    }
}

/// Pass/fail/skip/error counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Pass { .. } => self.passed += 1,
            Outcome::Fail { .. } => self.failed += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Error { .. } => self.errored += 1,
        }
    }

    pub fn merge(&mut self, other: Summary) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.skipped += other.skipped;
        self.errored += other.errored;
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errored
    }

    /// Skips do not count against a run.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Which suites a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Suite(String),
}

impl Selection {
    /// Positional arguments to a selection: none runs everything, one names a
    /// suite, more is a usage error.
    pub fn from_args(args: &[String]) -> Result<Self, HarnessError> {
        match args {
            [] => Ok(Selection::All),
            [name] => Ok(Selection::Suite(name.clone())),
            _ => Err(HarnessError::TooManyArguments { count: args.len() }),
        }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// The program under test.
pub trait Subject {
    /// Runs the program once with `input` as its standard input and waits for
    /// it to exit.
    fn invoke(&mut self, input: &Path) -> Result<Invocation, HarnessError>;
}

/// Receives suite headers, per-fixture outcomes and the final summary.
pub trait Reporter {
    fn suite_started(&mut self, suite: &Suite);
    fn fixture_finished(&mut self, suite: &Suite, fixture: &Fixture, outcome: &Outcome);
    fn run_finished(&mut self, summary: &Summary);
}

/// Spawns the compiler binary as a child process.
#[derive(Debug, Clone)]
pub struct ProcessSubject {
    program: PathBuf,
}

impl ProcessSubject {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Subject for ProcessSubject {
    fn invoke(&mut self, input: &Path) -> Result<Invocation, HarnessError> {
        let stdin = File::open(input).map_err(|source| HarnessError::FixtureRead {
            path: input.to_path_buf(),
            source,
        })?;

        debug!(program = %self.program.display(), input = %input.display(), "launching compiler");
        let started = Instant::now();
        let output = Command::new(&self.program)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| HarnessError::Launch {
                program: self.program.clone(),
                source,
            })?;
        debug!(
            code = ?output.status.code(),
            elapsed = ?started.elapsed(),
            "compiler exited"
        );

        Ok(Invocation {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Drives a [`Subject`] through the suites of a [`Registry`].
pub struct Orchestrator<S, R> {
    registry: Registry,
    subject: S,
    reporter: R,
    fixture_root: PathBuf,
}

impl<S: Subject, R: Reporter> Orchestrator<S, R> {
    pub fn new(registry: Registry, subject: S, reporter: R, fixture_root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            subject,
            reporter,
            fixture_root: fixture_root.into(),
        }
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Runs whatever `selection` names and reports the final summary.
    pub fn run(&mut self, selection: &Selection) -> Result<Summary, HarnessError> {
        let suites = match selection {
            Selection::All => self.registry.iter().collect(),
            Selection::Suite(name) => vec![self.lookup(name)?],
        };
        let summary = self.run_suites(suites);
        self.reporter.run_finished(&summary);
        Ok(summary)
    }

    /// Runs every registered suite in registration order.
    pub fn run_all(&mut self) -> Summary {
        let suites = self.registry.iter().collect();
        let summary = self.run_suites(suites);
        self.reporter.run_finished(&summary);
        summary
    }

    /// Runs one suite by name. Unknown names fail before anything is launched.
    #[tracing::instrument(skip(self))]
    pub fn run_suite(&mut self, name: &str) -> Result<Summary, HarnessError> {
        let suite = self.lookup(name)?;
        Ok(self.execute_suite(suite))
    }

    fn lookup(&self, name: &str) -> Result<&'static Suite, HarnessError> {
        self.registry
            .get(name)
            .ok_or_else(|| HarnessError::unknown_suite(name, self.registry.names()))
    }

    fn run_suites(&mut self, suites: Vec<&'static Suite>) -> Summary {
        let mut summary = Summary::default();
        for suite in suites {
            summary.merge(self.execute_suite(suite));
        }
        summary
    }

    fn execute_suite(&mut self, suite: &Suite) -> Summary {
        debug!(suite = suite.name, fixtures = suite.fixtures.len(), "running suite");
        self.reporter.suite_started(suite);

        let mut summary = Summary::default();
        for fixture in suite.fixtures {
            let outcome = self.run_fixture(fixture);
            summary.record(&outcome);
            self.reporter.fixture_finished(suite, fixture, &outcome);
        }
        summary
    }

    fn run_fixture(&mut self, fixture: &Fixture) -> Outcome {
        let path = fixture.resolve(&self.fixture_root);
        if !path.is_file() {
            return Outcome::Skipped {
                reason: format!("fixture `{}` not found", path.display()),
            };
        }

        match self.subject.invoke(&path) {
            Ok(invocation) => Outcome::classify(fixture, invocation),
            Err(error) => Outcome::Error { error },
        }
    }
}
