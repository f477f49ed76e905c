// warnscan - core/parser.rs
//
// The warning scan loop. Core layer: operates on decoded content handed in
// by the app layer, never touches the filesystem.
//
// Repeated non-overlapping search over the whole content, each search
// starting where the previous match ended, so the output order is the
// document order of the matches. Matches may span lines.

use crate::core::model::Warning;
use crate::core::pattern::WarningPattern;

/// Scan `content` with `pattern`, appending one `Warning` per match to
/// `out`. Returns the number of warnings appended.
///
/// The output collection is caller-owned and appended in place; zero
/// matches is a successful scan that appends nothing.
pub fn scan_into(content: &str, pattern: &WarningPattern, out: &mut Vec<Warning>) -> usize {
    tracing::debug!(pattern = pattern.as_str(), "Scanning with pattern");

    let before = out.len();
    for caps in pattern.regex().captures_iter(content) {
        let warning = pattern.extract(&caps);
        tracing::debug!(
            file = %warning.file,
            line = %warning.line,
            id = %warning.id,
            message = %warning.message,
            "Matched warning"
        );
        out.push(warning);
    }

    let appended = out.len() - before;
    tracing::debug!(appended, "Scan complete");
    appended
}

/// Scan `content` into a fresh vector.
pub fn scan_content(content: &str, pattern: &WarningPattern) -> Vec<Warning> {
    let mut warnings = Vec::new();
    scan_into(content, pattern, &mut warnings);
    warnings
}

// =============================================================================
// Tests
// =============================================================================
