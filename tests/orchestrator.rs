//! Orchestrator runs against real child processes.
#![cfg(unix)]

mod common;

use common::{fixture_tree, logging_script, read_log, SHELL};
use seman_harness::cli::output::ReportBuffer;
use seman_harness::harness::{Orchestrator, ProcessSubject, Selection, Summary};
use seman_harness::registry::{Fixture, Registry, Suite};
use seman_harness::status::CompilerStatus;
use seman_harness::HarnessError;

const SUITES: &[Suite] = &[
    Suite {
        name: "ret3",
        fixtures: &[
            Fixture::new("cases/valid.zig", CompilerStatus::Ok),
            Fixture::new("cases/invalid.zig", CompilerStatus::Undefined),
            Fixture::new("cases/absent.zig", CompilerStatus::Undefined),
        ],
    },
    Suite {
        name: "ret4",
        fixtures: &[Fixture::new("cases/ret4.zig", CompilerStatus::Ok)],
    },
];

fn orchestrator(root: &std::path::Path) -> Orchestrator<ProcessSubject, ReportBuffer> {
    Orchestrator::new(
        Registry::new(SUITES),
        ProcessSubject::new(SHELL),
        ReportBuffer::new(),
        root,
    )
}

#[test]
fn single_fixture_suite_passes_end_to_end() {
    let dir = fixture_tree(&[("cases/ret4.zig", "exit 0\n")]);
    let mut orch = orchestrator(dir.path());

    let summary = orch.run(&Selection::Suite("ret4".into())).unwrap();

    assert_eq!(
        summary,
        Summary {
            passed: 1,
            failed: 0,
            skipped: 0,
            errored: 0,
        }
    );
    let report = orch.reporter().as_str();
    assert!(report.contains("PASS: cases/ret4.zig [ret4]"));
    assert!(report.contains("total 1, passed 1, failed 0, skipped 0, errors 0"));
}

#[test]
fn fixtures_run_in_order_and_missing_ones_are_skipped() {
    let scratch = tempfile::tempdir().unwrap();
    let log = scratch.path().join("calls.log");
    let valid = logging_script(&log, "valid", 0);
    let invalid = logging_script(&log, "invalid", 3);
    let dir = fixture_tree(&[
        ("cases/valid.zig", valid.as_str()),
        ("cases/invalid.zig", invalid.as_str()),
    ]);
    let mut orch = orchestrator(dir.path());

    let summary = orch.run_suite("ret3").unwrap();

    assert_eq!(read_log(&log), ["valid", "invalid"]);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.skipped, 1);
    assert!(orch.reporter().as_str().contains("SKIP: cases/absent.zig [ret3]"));
}

// `sh` reads its commands from stdin, so a fixture's exit code only comes
// back if the fixture bytes were piped in.
#[test]
fn exit_code_mismatch_reports_stderr() {
    let dir = fixture_tree(&[(
        "cases/ret4.zig",
        "echo 'error: undefined variable x' >&2\necho 'ignored stdout'\nexit 3\n",
    )]);
    let mut orch = orchestrator(dir.path());

    let summary = orch.run_suite("ret4").unwrap();

    assert_eq!(summary.failed, 1);
    let report = orch.reporter().as_str();
    assert!(report.contains("expected 0 (success), got 3 (undefined function or variable)"));
    assert!(report.contains("    error: undefined variable x"));
    assert!(!report.contains("ignored stdout"));
}

#[test]
fn missing_compiler_is_reported_per_fixture() {
    let dir = fixture_tree(&[
        ("cases/valid.zig", "exit 0\n"),
        ("cases/invalid.zig", "exit 3\n"),
        ("cases/ret4.zig", "exit 0\n"),
    ]);
    let mut orch = Orchestrator::new(
        Registry::new(SUITES),
        ProcessSubject::new(dir.path().join("no-such-compiler")),
        ReportBuffer::new(),
        dir.path(),
    );

    let summary = orch.run_all();

    assert_eq!(summary.errored, 3);
    assert_eq!(summary.skipped, 1);
    assert!(orch.reporter().as_str().contains("ERROR: cases/ret4.zig [ret4]"));
}

#[test]
fn run_all_covers_suites_in_registration_order() {
    let scratch = tempfile::tempdir().unwrap();
    let log = scratch.path().join("calls.log");
    let valid = logging_script(&log, "ret3-valid", 0);
    let invalid = logging_script(&log, "ret3-invalid", 0);
    let ret4 = logging_script(&log, "ret4", 0);
    let dir = fixture_tree(&[
        ("cases/valid.zig", valid.as_str()),
        ("cases/invalid.zig", invalid.as_str()),
        ("cases/ret4.zig", ret4.as_str()),
    ]);
    let mut orch = orchestrator(dir.path());

    let summary = orch.run(&Selection::All).unwrap();

    assert_eq!(read_log(&log), ["ret3-valid", "ret3-invalid", "ret4"]);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
    let report = orch.reporter().as_str();
    let ret3 = report.find("--- Suite ret3").unwrap();
    let ret4 = report.find("--- Suite ret4").unwrap();
    assert!(ret3 < ret4);
}

#[test]
fn unknown_suite_launches_nothing() {
    let scratch = tempfile::tempdir().unwrap();
    let log = scratch.path().join("calls.log");
    let script = logging_script(&log, "ret4", 0);
    let dir = fixture_tree(&[("cases/ret4.zig", script.as_str())]);
    let mut orch = orchestrator(dir.path());

    let err = orch.run(&Selection::Suite("ret9".into())).unwrap_err();

    assert!(matches!(err, HarnessError::UnknownSuite { .. }));
    assert!(read_log(&log).is_empty());
}
