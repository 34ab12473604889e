//! Handles all user-facing output for the harness.
//!
//! Both reporters render the same text through [`render_fixture`] and
//! friends; the terminal one adds color, the buffer one captures plain text
//! for tests or programmatic use.

use std::error::Error as _;
use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::harness::{Outcome, Reporter, Summary};
use crate::registry::{Fixture, Registry, Suite};
use crate::status::describe_code;

// ============================================================================
// REPORTERS: TermReporter and ReportBuffer implementations
// ============================================================================

/// TermReporter: writes colored reports to stdout for CLI use.
pub struct TermReporter {
    out: StandardStream,
}

impl TermReporter {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
        }
    }
}

impl Reporter for TermReporter {
    fn suite_started(&mut self, suite: &Suite) {
        render_suite_header(&mut self.out, suite);
    }

    fn fixture_finished(&mut self, suite: &Suite, fixture: &Fixture, outcome: &Outcome) {
        render_fixture(&mut self.out, suite, fixture, outcome);
    }

    fn run_finished(&mut self, summary: &Summary) {
        render_summary(&mut self.out, summary);
    }
}

/// ReportBuffer: collects the report as plain text.
pub struct ReportBuffer {
    out: NoColor<Vec<u8>>,
}

impl ReportBuffer {
    pub fn new() -> Self {
        Self {
            out: NoColor::new(Vec::new()),
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.out.get_ref()).unwrap_or_default()
    }
}

impl Default for ReportBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ReportBuffer {
    fn suite_started(&mut self, suite: &Suite) {
        render_suite_header(&mut self.out, suite);
    }

    fn fixture_finished(&mut self, suite: &Suite, fixture: &Fixture, outcome: &Outcome) {
        render_fixture(&mut self.out, suite, fixture, outcome);
    }

    fn run_finished(&mut self, summary: &Summary) {
        render_summary(&mut self.out, summary);
    }
}

// ============================================================================
// RENDERING
// ============================================================================

pub fn render_suite_header(out: &mut dyn WriteColor, suite: &Suite) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(
        out,
        "--- Suite {} ({} fixtures) ---",
        suite.name,
        suite.fixtures.len()
    );
    let _ = out.reset();
}

pub fn render_fixture(out: &mut dyn WriteColor, suite: &Suite, fixture: &Fixture, outcome: &Outcome) {
    match outcome {
        Outcome::Pass { code } => {
            write_label(out, "PASS", Color::Green);
            let _ = writeln!(out, ": {} [{}] (exit {})", fixture.path, suite.name, code);
        }
        Outcome::Fail {
            expected,
            actual,
            stderr,
        } => {
            write_label(out, "FAIL", Color::Red);
            let _ = writeln!(out, ": {} [{}]", fixture.path, suite.name);
            let actual = match actual {
                Some(code) => describe_code(*code),
                None => "no exit code (terminated by signal)".to_string(),
            };
            let _ = writeln!(out, "  expected {}, got {}", describe_code(*expected), actual);
            write_stderr(out, stderr);
        }
        Outcome::Skipped { reason } => {
            write_label(out, "SKIP", Color::Yellow);
            let _ = writeln!(out, ": {} [{}] ({})", fixture.path, suite.name, reason);
        }
        Outcome::Error { error } => {
            write_label(out, "ERROR", Color::Magenta);
            let _ = writeln!(out, ": {} [{}]", fixture.path, suite.name);
            let _ = writeln!(out, "  {}", error);
            let mut source = error.source();
            while let Some(cause) = source {
                let _ = writeln!(out, "  caused by: {}", cause);
                source = cause.source();
            }
        }
    }
}

pub fn render_summary(out: &mut dyn WriteColor, summary: &Summary) {
    let _ = writeln!(out);
    let _ = write!(out, "Test summary: total {}, ", summary.total());
    write_label(out, "passed", Color::Green);
    let _ = write!(out, " {}, ", summary.passed);
    write_label(out, "failed", Color::Red);
    let _ = write!(out, " {}, ", summary.failed);
    write_label(out, "skipped", Color::Yellow);
    let _ = write!(out, " {}, ", summary.skipped);
    write_label(out, "errors", Color::Magenta);
    let _ = writeln!(out, " {}", summary.errored);
}

/// Prints every suite with its fixtures and expected codes.
pub fn render_registry(out: &mut dyn WriteColor, registry: &Registry) {
    for suite in registry.iter() {
        let _ = out.set_color(ColorSpec::new().set_bold(true));
        let _ = writeln!(out, "{}", suite.name);
        let _ = out.reset();
        for fixture in suite.fixtures {
            let _ = writeln!(
                out,
                "  {} -> {}",
                fixture.path,
                describe_code(fixture.expected)
            );
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_label(out: &mut dyn WriteColor, label: &str, color: Color) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(out, "{}", label);
    let _ = out.reset();
}

fn write_stderr(out: &mut dyn WriteColor, stderr: &str) {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        let _ = writeln!(out, "  stderr: (empty)");
        return;
    }
    let _ = writeln!(out, "  stderr:");
    for line in stderr.lines() {
        let _ = writeln!(out, "    {}", line);
    }
}
