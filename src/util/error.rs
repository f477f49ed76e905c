// warnscan - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all warnscan operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum WarnscanError {
    /// Warning pattern compilation or validation failed.
    Pattern(PatternError),

    /// Report file reading, decoding, or scanning failed.
    Report(ReportError),

    /// Profile loading or validation failed.
    Profile(ProfileError),

    /// Report file location failed.
    Locate(LocateError),
}

impl fmt::Display for WarnscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "Pattern error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Profile(e) => write!(f, "Profile error: {e}"),
            Self::Locate(e) => write!(f, "Locate error: {e}"),
        }
    }
}

impl std::error::Error for WarnscanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Profile(e) => Some(e),
            Self::Locate(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern errors
// ---------------------------------------------------------------------------

/// Errors related to warning pattern compilation and validation.
///
/// All variants surface at configuration time, before any report is scanned:
/// a pattern that compiles here is guaranteed to yield all four warning
/// fields on every match.
#[derive(Debug)]
pub enum PatternError {
    /// The pattern exceeds the maximum allowed length.
    TooLong { length: usize, max_length: usize },

    /// The pattern is not a valid regular expression.
    Invalid {
        pattern: String,
        source: regex::Error,
    },

    /// The compiled pattern declares fewer capture groups than a warning
    /// record has fields, and does not declare the full named set
    /// (`file`, `line`, `id`, `message`) either.
    MissingCaptureGroups {
        pattern: String,
        found: usize,
        required: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length, max_length } => write!(
                f,
                "Pattern is {length} chars, exceeds maximum of {max_length}"
            ),
            Self::Invalid { pattern, source } => {
                write!(f, "Invalid regex '{pattern}': {source}")
            }
            Self::MissingCaptureGroups {
                pattern,
                found,
                required,
            } => write!(
                f,
                "Pattern '{pattern}' declares {found} capture groups, \
                 {required} are required (file, line, id, message)"
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PatternError> for WarnscanError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

// ---------------------------------------------------------------------------
// Decode errors
// ---------------------------------------------------------------------------

/// Errors related to charset resolution and byte decoding.
#[derive(Debug)]
pub enum DecodeError {
    /// The charset label does not name a supported encoding.
    UnsupportedCharset { label: String },

    /// The bytes are not valid under the effective encoding.
    Malformed { encoding: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharset { label } => {
                write!(f, "Unsupported charset label '{label}'")
            }
            Self::Malformed { encoding } => {
                write!(f, "Content is not valid {encoding}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to reading and scanning a report file.
#[derive(Debug)]
pub enum ReportError {
    /// The report file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The report content could not be decoded under the requested charset.
    Decode { path: PathBuf, source: DecodeError },

    /// The caller-supplied warning pattern is unusable.
    Pattern(PatternError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read report '{}': {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Cannot decode report '{}': {source}", path.display())
            }
            Self::Pattern(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Pattern(e) => Some(e),
        }
    }
}

impl From<PatternError> for ReportError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<ReportError> for WarnscanError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Profile errors
// ---------------------------------------------------------------------------

/// Errors related to compiler profile loading and validation.
#[derive(Debug)]
pub enum ProfileError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Profile file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A required field is missing from the profile definition.
    MissingField {
        profile_id: String,
        field: &'static str,
    },

    /// The profile's warning pattern failed compilation or validation.
    Pattern {
        profile_id: String,
        source: PatternError,
    },

    /// The profile names a charset label that does not resolve.
    UnknownCharset { profile_id: String, label: String },

    /// Maximum number of profiles exceeded.
    TooManyProfiles { count: usize, max: usize },

    /// I/O error reading a profile file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Profile '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::MissingField { profile_id, field } => {
                write!(
                    f,
                    "Profile '{profile_id}': missing required field '{field}'"
                )
            }
            Self::Pattern { profile_id, source } => {
                write!(f, "Profile '{profile_id}': {source}")
            }
            Self::UnknownCharset { profile_id, label } => {
                write!(f, "Profile '{profile_id}': unknown charset '{label}'")
            }
            Self::TooManyProfiles { count, max } => {
                write!(f, "Too many profiles loaded ({count}), maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading profile '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Pattern { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ProfileError> for WarnscanError {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}

// ---------------------------------------------------------------------------
// Locate errors
// ---------------------------------------------------------------------------

/// Errors related to resolving report files under a base directory.
#[derive(Debug)]
pub enum LocateError {
    /// The base directory does not exist.
    RootNotFound { path: PathBuf },

    /// The base path is not a directory.
    NotADirectory { path: PathBuf },

    /// The report glob pattern is invalid.
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// Walkdir traversal error (wraps individual file/dir access failures).
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "Base directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Base path '{}' is not a directory", path.display())
            }
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid report pattern '{pattern}': {source}")
            }
            Self::Traversal { path, source } => {
                write!(f, "Error traversing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::Traversal { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LocateError> for WarnscanError {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

/// Convenience type alias for warnscan results.
pub type Result<T> = std::result::Result<T, WarnscanError>;
