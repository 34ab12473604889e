//! The harness command-line interface.
//!
//! Parses arguments, resolves what to run, and hands the work to the
//! [`Orchestrator`](crate::harness::Orchestrator). Argument errors are the
//! only way to stop before anything is launched.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use miette::Report;
use termcolor::{ColorChoice, StandardStream};

use crate::cli::args::{HarnessArgs, DEFAULT_COMPILER};
use crate::cli::output::{render_registry, TermReporter};
use crate::errors::HarnessError;
use crate::harness::{Orchestrator, ProcessSubject, Selection};
use crate::registry::Registry;

pub mod args;
pub mod output;

/// Configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// The compiler binary under test.
    pub compiler: PathBuf,
    /// Directory fixture paths are resolved against.
    pub fixture_root: PathBuf,
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compiler: PathBuf::from(DEFAULT_COMPILER),
            fixture_root: PathBuf::from("."),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl HarnessConfig {
    pub fn from_args(args: &HarnessArgs) -> Self {
        Self {
            compiler: args.compiler.clone(),
            fixture_root: args.fixtures.clone(),
            use_colors: !args.no_color && atty::is(atty::Stream::Stdout),
        }
    }
}

/// The main entry point for the CLI.
pub fn run() {
    let args = HarnessArgs::parse();
    let config = HarnessConfig::from_args(&args);
    let registry = Registry::builtin();

    let selection = match Selection::from_args(&args.suites) {
        Ok(selection) => selection,
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    };

    if args.list {
        let choice = if config.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        render_registry(&mut StandardStream::stdout(choice), &registry);
        return;
    }

    match execute(&selection, &config, registry) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

/// Runs `selection` against the configured compiler.
///
/// Returns whether every fixture passed or was skipped. An unknown suite is
/// returned before any fixture runs.
pub fn execute(
    selection: &Selection,
    config: &HarnessConfig,
    registry: Registry,
) -> Result<bool, HarnessError> {
    let mut orchestrator = Orchestrator::new(
        registry,
        ProcessSubject::new(&config.compiler),
        TermReporter::new(config.use_colors),
        &config.fixture_root,
    );
    let summary = orchestrator.run(selection)?;
    Ok(summary.is_success())
}

pub fn print_error(error: HarnessError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
