// warnscan - tests/e2e_report.rs
//
// End-to-end tests for the report parsing pipeline.
//
// These tests exercise the real filesystem, real profile loading, real
// charset decoding, and real regex scanning — no mocks, no stubs. The
// fixture BuildLog.htm is byte-order-marked UTF-16LE with CRLF line
// endings, exactly as MSVC writes it; build.log is plain UTF-8 gcc output.

use std::path::{Path, PathBuf};
use warnscan::app::locate::locate_reports;
use warnscan::app::profile_mgr::load_all_profiles;
use warnscan::app::report::{parse_report, parse_report_into, parse_report_with_profile};
use warnscan::core::model::Warning;
use warnscan::core::profile::find_profile;
use warnscan::util::constants;
use warnscan::util::error::ReportError;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// MSVC UTF-16 report
// =============================================================================

/// The MSVC fixture carries nine warning lines among build noise; all nine
/// must come back, in top-to-bottom document order.
#[test]
fn e2e_parses_msvc_buildlog() {
    let warnings = parse_report(
        &fixture("BuildLog.htm"),
        constants::DEFAULT_CHARSET,
        constants::DEFAULT_PATTERN,
    )
    .expect("fixture should parse");

    assert_eq!(warnings.len(), 9);

    assert_eq!(
        warnings[0],
        Warning::new(
            "main.cpp",
            "12",
            "C4101",
            "'unused' : unreferenced local variable"
        )
    );
    // Forward-slash separated path, mid-file.
    assert_eq!(warnings[4].file, "io.cpp");
    assert_eq!(warnings[4].line, "101");
    assert_eq!(warnings[4].id, "C4018");
    // Last matching line in the file is the last warning out.
    assert_eq!(warnings[8].file, "main.cpp");
    assert_eq!(warnings[8].line, "90");
    assert_eq!(warnings[8].id, "C4706");
}

/// CRLF line endings must not leak a trailing '\r' into the message field.
#[test]
fn e2e_crlf_messages_are_clean() {
    let warnings = parse_report(
        &fixture("BuildLog.htm"),
        constants::DEFAULT_CHARSET,
        constants::DEFAULT_PATTERN,
    )
    .unwrap();

    for w in &warnings {
        assert!(
            !w.message.ends_with('\r'),
            "message carries trailing CR: {:?}",
            w.message
        );
        assert!(!w.file.contains('\\'), "file should be the bare filename");
    }
}

/// Same file, same arguments, two runs: structurally equal output.
#[test]
fn e2e_parse_is_idempotent() {
    let path = fixture("BuildLog.htm");
    let first = parse_report(&path, constants::DEFAULT_CHARSET, constants::DEFAULT_PATTERN).unwrap();
    let second =
        parse_report(&path, constants::DEFAULT_CHARSET, constants::DEFAULT_PATTERN).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// GCC UTF-8 report via built-in profile
// =============================================================================

#[test]
fn e2e_parses_gcc_log_with_builtin_profile() {
    let (profiles, errors) = load_all_profiles(None);
    assert!(errors.is_empty(), "unexpected profile errors: {errors:?}");

    let gcc = find_profile(&profiles, "gcc").expect("gcc profile");

    let mut warnings = Vec::new();
    let appended =
        parse_report_with_profile(&fixture("build.log"), gcc, &mut warnings).expect("parse");

    assert_eq!(appended, 4);
    assert_eq!(warnings[0].file, "src/main.c");
    assert_eq!(warnings[0].line, "9");
    assert_eq!(warnings[0].id, "-Wunused-variable");
    assert_eq!(warnings[0].message, "unused variable 'x'");
    assert_eq!(warnings[3].file, "lib/io.c");
    assert_eq!(warnings[3].id, "-Wmaybe-uninitialized");
}

/// Appending into a vector that already holds warnings from another report
/// must extend it, not replace it — per-file parsing, caller loops.
#[test]
fn e2e_multiple_reports_accumulate_in_caller_collection() {
    let (profiles, _) = load_all_profiles(None);
    let gcc = find_profile(&profiles, "gcc").unwrap();
    let msvc = find_profile(&profiles, "msvc").unwrap();

    let mut warnings = Vec::new();
    let from_msvc =
        parse_report_with_profile(&fixture("BuildLog.htm"), msvc, &mut warnings).unwrap();
    let from_gcc = parse_report_with_profile(&fixture("build.log"), gcc, &mut warnings).unwrap();

    assert_eq!(from_msvc, 9);
    assert_eq!(from_gcc, 4);
    assert_eq!(warnings.len(), 13);
    assert_eq!(warnings[0].id, "C4101");
    assert_eq!(warnings[9].id, "-Wunused-variable");
}

// =============================================================================
// Failure surfaces
// =============================================================================

#[test]
fn e2e_unreadable_report_fails_before_output() {
    let mut out = Vec::new();
    let result = parse_report_into(
        Path::new("/nonexistent/compiler-reports/BuildLog.htm"),
        constants::DEFAULT_CHARSET,
        constants::DEFAULT_PATTERN,
        &mut out,
    );
    assert!(matches!(result, Err(ReportError::Io { .. })));
    assert!(out.is_empty());
}

/// The fixture's UTF-16LE byte-order mark overrides whatever charset the
/// caller declares, so even a wrong label parses the file correctly.
#[test]
fn e2e_bom_overrides_declared_charset() {
    let warnings = parse_report(&fixture("BuildLog.htm"), "UTF-8", constants::DEFAULT_PATTERN)
        .expect("BOM should override the declared charset");
    assert_eq!(warnings.len(), 9);
}

/// Without a BOM to rescue it, malformed content under the declared charset
/// is a decode error, not a silent empty result.
#[test]
fn e2e_malformed_content_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("garbage.log");
    std::fs::write(&report, [b'o', b'k', 0xFF, 0xFF, b'x']).unwrap();

    let result = parse_report(&report, "UTF-8", constants::DEFAULT_PATTERN);
    assert!(matches!(result, Err(ReportError::Decode { .. })));
}

#[test]
fn e2e_two_group_pattern_rejected() {
    let result = parse_report(
        &fixture("BuildLog.htm"),
        constants::DEFAULT_CHARSET,
        r"^(.*)\(([0-9]+)\)",
    );
    assert!(matches!(result, Err(ReportError::Pattern(_))));
}

// =============================================================================
// Report location
// =============================================================================

/// Locating reports under a scratch project tree laid out the conventional
/// way finds exactly the files parsing expects.
#[test]
fn e2e_locate_then_parse() {
    let project = tempfile::tempdir().unwrap();
    let reports = project.path().join("compiler-reports");
    std::fs::create_dir(&reports).unwrap();
    std::fs::copy(fixture("build.log"), reports.join("build.log")).unwrap();

    let (profiles, _) = load_all_profiles(None);
    let gcc = find_profile(&profiles, "gcc").unwrap();

    let found = locate_reports(project.path(), &gcc.report_pattern).unwrap();
    assert_eq!(found.len(), 1);

    let mut warnings = Vec::new();
    for report in &found {
        parse_report_with_profile(report, gcc, &mut warnings).unwrap();
    }
    assert_eq!(warnings.len(), 4);
}

// =============================================================================
// Serialisation
// =============================================================================

/// Hosts export warnings as JSON; the field names are part of the contract.
#[test]
fn e2e_warning_serialises_with_stable_field_names() {
    let w = Warning::new("file.cpp", "42", "C4996", "'foo' was declared deprecated");
    let json = serde_json::to_value(&w).unwrap();
    assert_eq!(json["file"], "file.cpp");
    assert_eq!(json["line"], "42");
    assert_eq!(json["id"], "C4996");
    assert_eq!(json["message"], "'foo' was declared deprecated");
}
