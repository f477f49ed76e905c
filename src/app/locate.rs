// warnscan - app/locate.rs
//
// Resolves report files under a project base directory from a glob
// pattern, so hosts can point at the conventional report location
// (e.g. "compiler-reports/BuildLog.htm" or "**/BuildLog*.htm") without
// hard-coding paths.
//
// Matching is against the `/`-separated path relative to the base
// directory; `*` and `?` stay within one path component, `**` crosses
// components. Parsing stays strictly per-file — the caller loops over the
// returned paths.

use crate::util::constants;
use crate::util::error::LocateError;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Find report files under `base_dir` whose relative path matches
/// `report_pattern`. Returns matches sorted by path; no matches is
/// `Ok(empty)`, not an error.
pub fn locate_reports(base_dir: &Path, report_pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
    let meta = std::fs::metadata(base_dir).map_err(|_| LocateError::RootNotFound {
        path: base_dir.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(LocateError::NotADirectory {
            path: base_dir.to_path_buf(),
        });
    }

    let pattern = Pattern::new(report_pattern).map_err(|e| LocateError::InvalidPattern {
        pattern: report_pattern.to_string(),
        source: e,
    })?;

    // `*` must not cross a directory boundary; `**` does.
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    tracing::debug!(
        base = %base_dir.display(),
        pattern = report_pattern,
        "Locating report files"
    );

    let mut matches: Vec<PathBuf> = Vec::new();

    let walker = walkdir::WalkDir::new(base_dir)
        .max_depth(constants::MAX_LOCATE_DEPTH)
        .follow_links(false);

    for entry_result in walker {
        let entry = entry_result.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| base_dir.to_path_buf());
            LocateError::Traversal { path, source: e }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(rel) = relative_slash_path(entry.path(), base_dir) else {
            tracing::debug!(path = %entry.path().display(), "Skipping non-UTF-8 path");
            continue;
        };

        if pattern.matches_with(&rel, options) {
            if matches.len() >= constants::MAX_REPORT_MATCHES {
                tracing::warn!(
                    max = constants::MAX_REPORT_MATCHES,
                    pattern = report_pattern,
                    "Report match limit reached, further matches ignored"
                );
                break;
            }
            matches.push(entry.path().to_path_buf());
        }
    }

    matches.sort();

    tracing::debug!(found = matches.len(), "Report location complete");
    Ok(matches)
}

/// The path of `path` relative to `base`, joined with `/` regardless of
/// platform. Returns `None` for paths that are not valid UTF-8.
fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Option<Vec<&str>> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    Some(parts?.join("/"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_report_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        let reports = root.join("compiler-reports");
        fs::create_dir(&reports).expect("mkdir compiler-reports");
        fs::write(reports.join("BuildLog.htm"), "log").expect("write BuildLog.htm");
        fs::write(reports.join("build.log"), "log").expect("write build.log");

        let nested = root.join("module-a").join("compiler-reports");
        fs::create_dir_all(&nested).expect("mkdir nested");
        fs::write(nested.join("BuildLog.htm"), "log").expect("write nested BuildLog.htm");

        dir
    }

    #[test]
    fn test_finds_conventional_default_path() {
        let dir = make_report_tree();
        let found =
            locate_reports(dir.path(), crate::util::constants::DEFAULT_REPORT_PATH).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("compiler-reports/BuildLog.htm"));
    }

    #[test]
    fn test_single_star_stays_in_component() {
        let dir = make_report_tree();
        let found = locate_reports(dir.path(), "compiler-reports/*").unwrap();
        assert_eq!(found.len(), 2, "only the top-level reports dir matches");
    }

    #[test]
    fn test_double_star_crosses_components() {
        let dir = make_report_tree();
        let found = locate_reports(dir.path(), "**/BuildLog.htm").unwrap();
        assert_eq!(found.len(), 2, "nested BuildLog.htm should match too");
        // Sorted by path.
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    #[test]
    fn test_no_matches_is_empty_ok() {
        let dir = make_report_tree();
        let found = locate_reports(dir.path(), "**/*.xml").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let result = locate_reports(Path::new("/nonexistent/warnscan"), "**/*.htm");
        assert!(matches!(result, Err(LocateError::RootNotFound { .. })));
    }

    #[test]
    fn test_root_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let result = locate_reports(&file, "*.htm");
        assert!(matches!(result, Err(LocateError::NotADirectory { .. })));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let dir = make_report_tree();
        let result = locate_reports(dir.path(), "compiler-reports/[");
        assert!(matches!(result, Err(LocateError::InvalidPattern { .. })));
    }
}
