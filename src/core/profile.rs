// warnscan - core/profile.rs
//
// Compiler profile loading and validation.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by app::profile_mgr, which feeds content here.
//
// A profile is one compiler's (pattern, charset, report location) triple.
// The original per-vendor parser variants are data here, not code.

use crate::core::encoding;
use crate::core::model::{CompilerProfile, WarningField};
use crate::core::pattern::WarningPattern;
use crate::util::constants;
use crate::util::error::ProfileError;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML profile definition as deserialized from a .toml file.
/// This is validated and compiled into a `CompilerProfile` for runtime use.
#[derive(Debug, Deserialize)]
pub struct ProfileDefinition {
    pub profile: ProfileMeta,
    pub report: ReportDef,
    pub parsing: ParsingDef,
}

#[derive(Debug, Deserialize)]
pub struct ProfileMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportDef {
    /// Glob locating report files, relative to the project base directory.
    pub default_path: String,
    #[serde(default = "default_charset")]
    pub charset: String,
}

fn default_charset() -> String {
    constants::DEFAULT_CHARSET.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ParsingDef {
    pub pattern: String,
    /// Which warning field each numeric capture group 1..=4 feeds.
    /// Ignored when the pattern declares the full named-group set.
    #[serde(default)]
    pub group_order: Option<[WarningField; 4]>,
}

// =============================================================================
// Profile validation and compilation
// =============================================================================

/// Parse a TOML string into a `ProfileDefinition`.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_profile_toml(
    toml_content: &str,
    source_path: &Path,
) -> Result<ProfileDefinition, ProfileError> {
    toml::from_str(toml_content).map_err(|e| ProfileError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })
}

/// Validate a `ProfileDefinition` and compile it into a runtime
/// `CompilerProfile`.
///
/// Validates:
/// - Required fields are present and non-empty
/// - The warning pattern compiles and declares the required capture groups
/// - The charset label resolves to a real encoding
pub fn validate_and_compile(
    def: ProfileDefinition,
    is_builtin: bool,
) -> Result<CompilerProfile, ProfileError> {
    let id = &def.profile.id;

    if id.is_empty() {
        return Err(ProfileError::MissingField {
            profile_id: "(empty)".to_string(),
            field: "profile.id",
        });
    }
    if def.profile.name.is_empty() {
        return Err(ProfileError::MissingField {
            profile_id: id.clone(),
            field: "profile.name",
        });
    }
    if def.report.default_path.is_empty() {
        return Err(ProfileError::MissingField {
            profile_id: id.clone(),
            field: "report.default_path",
        });
    }
    if def.parsing.pattern.is_empty() {
        return Err(ProfileError::MissingField {
            profile_id: id.clone(),
            field: "parsing.pattern",
        });
    }

    let pattern = WarningPattern::compile(&def.parsing.pattern, def.parsing.group_order).map_err(
        |e| ProfileError::Pattern {
            profile_id: id.clone(),
            source: e,
        },
    )?;

    let charset = encoding::resolve_charset(&def.report.charset).map_err(|_| {
        ProfileError::UnknownCharset {
            profile_id: id.clone(),
            label: def.report.charset.clone(),
        }
    })?;

    Ok(CompilerProfile {
        id: id.clone(),
        name: def.profile.name,
        description: def.profile.description,
        pattern,
        charset,
        report_pattern: def.report.default_path,
        is_builtin,
    })
}

/// Select a profile by id from a loaded set.
pub fn find_profile<'a>(
    profiles: &'a [CompilerProfile],
    id: &str,
) -> Option<&'a CompilerProfile> {
    profiles.iter().find(|p| p.id == id)
}

// =============================================================================
// Built-in profiles (embedded at compile time)
// =============================================================================

/// Embedded TOML content for built-in profiles.
/// Each tuple is (filename, TOML content).
pub fn builtin_profile_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("msvc.toml", include_str!("../../profiles/msvc.toml")),
        ("gcc.toml", include_str!("../../profiles/gcc.toml")),
    ]
}

/// Load and validate all built-in profiles.
///
/// Invalid profiles are logged as errors and skipped (non-fatal).
/// Returns the successfully loaded profiles.
pub fn load_builtin_profiles() -> Vec<CompilerProfile> {
    let mut profiles = Vec::new();

    for (filename, content) in builtin_profile_sources() {
        let path = Path::new("<builtin>").join(filename);
        match parse_profile_toml(content, &path).and_then(|def| validate_and_compile(def, true)) {
            Ok(profile) => {
                tracing::debug!(profile_id = %profile.id, "Loaded built-in profile");
                profiles.push(profile);
            }
            Err(e) => {
                // A built-in profile that fails validation is a packaging bug,
                // but loading still degrades gracefully.
                tracing::error!(file = filename, error = %e, "Failed to load built-in profile");
            }
        }
    }

    profiles
}

// =============================================================================
// Tests
// =============================================================================
