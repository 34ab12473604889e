//! Harness errors.
//!
//! Only the two argument errors end the process. Every other variant is
//! raised inside a single fixture's run and turned into an
//! [`Outcome::Error`](crate::harness::Outcome::Error) there.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("unknown test suite `{name}`")]
    #[diagnostic(code(harness::unknown_suite))]
    UnknownSuite {
        name: String,
        available: Vec<&'static str>,
        #[help]
        help: Option<String>,
    },

    #[error("more than one argument is not supported")]
    #[diagnostic(
        code(harness::usage),
        help("pass a single suite name, or none to run every suite")
    )]
    TooManyArguments { count: usize },

    #[error("failed to run `{}`", program.display())]
    #[diagnostic(
        code(harness::launch),
        help("check that the compiler has been built and that --compiler points at it")
    )]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open fixture `{}`", path.display())]
    #[diagnostic(code(harness::fixture_read))]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HarnessError {
    pub fn unknown_suite(name: impl Into<String>, available: Vec<&'static str>) -> Self {
        let help = Some(format!("available suites: {}", available.join(", ")));
        HarnessError::UnknownSuite {
            name: name.into(),
            available,
            help,
        }
    }
}
