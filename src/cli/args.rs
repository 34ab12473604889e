//! Defines the command-line arguments for the harness.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// Compiler binary used when `--compiler` is not given.
pub const DEFAULT_COMPILER: &str = "../main";

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "seman-harness",
    version,
    about = "Runs fixture programs through the compiler and checks its exit codes."
)]
pub struct HarnessArgs {
    /// Suite to run. Every registered suite runs when omitted.
    ///
    /// Only one name is accepted. Put `--` before a name that starts with
    /// `-` so it is not read as an option.
    #[arg(value_name = "SUITE")]
    pub suites: Vec<String>,

    /// Path to the compiler binary under test.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_COMPILER)]
    pub compiler: PathBuf,

    /// Directory that fixture paths are resolved against.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub fixtures: PathBuf,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// List registered suites and their fixtures, then exit.
    #[arg(short, long)]
    pub list: bool,
}
