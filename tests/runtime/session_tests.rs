//! Integration tests for script sessions

use std::fs;

use blockscript_foundation::{Error, ExecError, ParseErrorKind, Value};
use blockscript_parser::ParserConfig;
use blockscript_runtime::{LineOutcome, RuntimeConfig, Session};

const SCRIPT: &str = r#"## convert minutes to seconds, then add a margin
#secs MULTIPLY "<MINUTES>" "60" -> VAR "SECONDS"
SUM "<SECONDS>" "30" -> CAP "TOTAL"
!SUM "<TOTAL>" "1000000" -> CAP "TOTAL"
"#;

fn session_with_minutes(minutes: &str) -> Session {
    let mut session = Session::new();
    session.store_mut().set_value("MINUTES", minutes);
    session
}

// =============================================================================
// Running Scripts
// =============================================================================

#[test]
fn runs_script_in_order() {
    let mut session = session_with_minutes("2");
    let report = session.run_script(SCRIPT).unwrap();

    assert_eq!(report.executed(), 2);
    assert_eq!(report.skipped(), 1);
    assert!(report.errors.is_empty());
    assert_eq!(session.store().get("SECONDS"), Some(&Value::from("120")));
    assert_eq!(session.store().get("TOTAL"), Some(&Value::from("150")));
    assert!(session.store().is_capture("TOTAL"));
    assert_eq!(
        session.store_mut().take_logs(),
        vec!["secs: 2 * 60 = 120", "Sum: 120 + 30 = 150"]
    );
}

#[test]
fn report_tracks_line_numbers() {
    let mut session = session_with_minutes("1");
    let report = session.run_script(SCRIPT).unwrap();
    let numbers: Vec<usize> = report.lines.iter().map(|(n, _)| *n).collect();
    assert_eq!(numbers, [1, 2, 3, 4]);
    assert_eq!(report.lines[0].1, LineOutcome::Comment);
}

#[test]
fn run_disabled_when_configured() {
    let mut session = Session::with_config(RuntimeConfig::default().with_skip_disabled(false));
    session.store_mut().set_value("MINUTES", "0");
    session.run_script(SCRIPT).unwrap();
    assert_eq!(session.store().get("TOTAL"), Some(&Value::from("1000030")));
}

#[test]
fn halting_error_carries_line() {
    let mut session = session_with_minutes("two");
    let err = session.run_script(SCRIPT).unwrap_err();
    assert!(matches!(err, Error::AtLine { line: 2, .. }));
    assert!(matches!(
        err.root(),
        Error::Exec(ExecError::OperandNotInteger { which: "First", .. })
    ));
    assert!(session.store().get("SECONDS").is_none());
}

#[test]
fn keep_going_collects_errors() {
    let mut session = Session::with_config(RuntimeConfig::default().with_halt_on_error(false));
    let source = "SUM \"1\" \"2\" -> VAR \"A\"\nSUM \"<A>\" \"x\" -> VAR \"B\"\nBOGUS\nSUM \"<A>\" \"<A>\" -> VAR \"C\"";
    let report = session.run_script(source).unwrap();

    assert_eq!(report.errors.len(), 2);
    assert!(matches!(report.errors[0], Error::AtLine { line: 2, .. }));
    assert!(matches!(
        report.errors[1].root(),
        Error::Parse(e) if e.kind == ParseErrorKind::UnknownStatement("BOGUS".to_string())
    ));
    assert_eq!(session.store().get("C"), Some(&Value::from("6")));
    assert!(session.store().get("B").is_none());
}

#[test]
fn eval_file_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("blockscript-session-{}.bs", std::process::id()));
    fs::write(&path, SCRIPT).unwrap();
    let mut session = session_with_minutes("3");
    let report = session.eval_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(report.executed(), 2);
    assert_eq!(session.store().get("TOTAL"), Some(&Value::from("210")));
}

#[test]
fn eval_missing_file_is_io_error() {
    let mut session = Session::new();
    let err = session
        .eval_file(std::path::Path::new("/nonexistent/blockscript.bs"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// =============================================================================
// Checking and Formatting
// =============================================================================

#[test]
fn check_script_parses_without_running() {
    let session = Session::new();
    let statements = session.check_script(SCRIPT).unwrap();
    assert_eq!(statements.len(), 3);
    assert!(session.store().is_empty());
}

#[test]
fn strict_check_reports_trailing_text() {
    let session = Session::with_config(
        RuntimeConfig::default().with_parser(ParserConfig::default().with_strict(true)),
    );
    let err = session
        .check_script("SUM \"1\" \"2\"\nSUM \"1\" \"2\" oops")
        .unwrap_err();
    assert!(matches!(err, Error::AtLine { line: 2, .. }));
}

#[test]
fn format_script_canonicalizes_statements() {
    let session = Session::new();
    let source = "## header   \n  #Sum  sum \"1\"\"2\"->var \"Y\"\n\n!#m Multiply \"3\" \"4\"";
    let formatted = session.format_script(source).unwrap();
    assert_eq!(
        formatted,
        "## header\n  SUM \"1\" \"2\" -> VAR \"Y\"\n\n!#m MULTIPLY \"3\" \"4\""
    );
}

#[test]
fn format_is_idempotent() {
    let session = Session::new();
    let once = session.format_script(SCRIPT).unwrap();
    assert_eq!(session.format_script(&once).unwrap(), once);
}
