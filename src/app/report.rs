// warnscan - app/report.rs
//
// Report parsing entry points: open a build log, decode it under the
// requested charset, and run the warning scan over the decoded content.
//
// The whole file is read with `std::fs::read`, so the descriptor is
// released on every exit path, including early pattern or decode failure.
// No retries: a failed open or decode is fatal to that invocation and
// surfaced immediately. The output vector is caller-owned; anything
// appended before a failure stays visible to the caller (in practice the
// pattern is validated and the content decoded before the first append,
// so a failing invocation appends nothing).

use crate::core::encoding;
use crate::core::model::{CompilerProfile, Warning};
use crate::core::parser;
use crate::core::pattern::WarningPattern;
use crate::util::error::ReportError;
use std::path::Path;

/// Parse a report file, appending one `Warning` per match to `out` in
/// document order. Returns the number of warnings appended.
///
/// `charset` is a WHATWG label (e.g. "UTF-16", "UTF-8"); `pattern` is a
/// regular expression with four capture groups (file, line, id, message),
/// either numeric 1..=4 or the full named set. Pattern validation happens
/// before any I/O, so a misconfigured pattern fails identically for
/// missing and present report files.
pub fn parse_report_into(
    path: &Path,
    charset: &str,
    pattern: &str,
    out: &mut Vec<Warning>,
) -> Result<usize, ReportError> {
    let compiled = WarningPattern::compile_default_order(pattern)?;

    let encoding = encoding::resolve_charset(charset).map_err(|e| ReportError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    scan_file(path, encoding, &compiled, out)
}

/// Parse a report file into a fresh vector.
pub fn parse_report(
    path: &Path,
    charset: &str,
    pattern: &str,
) -> Result<Vec<Warning>, ReportError> {
    let mut warnings = Vec::new();
    parse_report_into(path, charset, pattern, &mut warnings)?;
    Ok(warnings)
}

/// Parse a report file using a pre-validated compiler profile.
///
/// Pattern and charset were already validated when the profile loaded, so
/// the only failure modes left are the file itself: unreadable or
/// undecodable.
pub fn parse_report_with_profile(
    path: &Path,
    profile: &CompilerProfile,
    out: &mut Vec<Warning>,
) -> Result<usize, ReportError> {
    tracing::debug!(
        report = %path.display(),
        profile_id = %profile.id,
        "Parsing report with profile"
    );
    scan_file(path, profile.charset, &profile.pattern, out)
}

fn scan_file(
    path: &Path,
    encoding: &'static encoding_rs::Encoding,
    pattern: &WarningPattern,
    out: &mut Vec<Warning>,
) -> Result<usize, ReportError> {
    let bytes = std::fs::read(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = encoding::decode(&bytes, encoding).map_err(|e| ReportError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let appended = parser::scan_into(&content, pattern, out);
    tracing::debug!(
        report = %path.display(),
        warnings = appended,
        "Report parsed"
    );
    Ok(appended)
}

// =============================================================================
// Tests
// =============================================================================
