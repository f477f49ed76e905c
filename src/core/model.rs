// warnscan - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use crate::core::pattern::WarningPattern;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning (normalised output of scanning)
// =============================================================================

/// A single parsed compiler diagnostic.
///
/// One `Warning` is created per successful pattern match and never mutated
/// afterwards; ownership passes to the caller's output collection. `line` is
/// kept as the raw matched text — no numeric parsing happens here, since the
/// host decides how (and whether) to interpret line references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Warning {
    /// Source file the compiler attributed the diagnostic to.
    pub file: String,

    /// Line reference, verbatim from the log.
    pub line: String,

    /// Vendor warning identifier (e.g. "C4996").
    pub id: String,

    /// Diagnostic message text.
    pub message: String,
}

impl Warning {
    pub fn new(
        file: impl Into<String>,
        line: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line: line.into(),
            id: id.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Warning fields and capture-group mapping
// =============================================================================

/// The four fields of a `Warning`, used to name the destination of a
/// capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningField {
    File,
    Line,
    Id,
    Message,
}

impl WarningField {
    /// Capture-group name used in named-group patterns.
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Line => "line",
            Self::Id => "id",
            Self::Message => "message",
        }
    }

    /// All fields, in the default positional order (groups 1..=4).
    pub fn default_order() -> [WarningField; 4] {
        [Self::File, Self::Line, Self::Id, Self::Message]
    }
}

/// How capture groups of a compiled pattern map onto `Warning` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMapping {
    /// The pattern declares all four named groups
    /// `(?P<file>)`, `(?P<line>)`, `(?P<id>)`, `(?P<message>)`.
    Named,

    /// Numeric groups 1..=4 map onto fields in the declared order.
    Positional([WarningField; 4]),
}

// =============================================================================
// Compiler profile (runtime representation)
// =============================================================================

/// Runtime representation of one compiler's log format, after TOML parsing,
/// pattern compilation, and charset resolution. Everything fallible about a
/// profile has already failed by the time one of these exists.
///
/// Built from `ProfileDefinition` (the raw TOML structure) via validation.
#[derive(Debug, Clone)]
pub struct CompilerProfile {
    /// Unique profile identifier (e.g. "msvc").
    pub id: String,

    /// Human-readable name (e.g. "Microsoft Visual C++").
    pub name: String,

    /// Description of what this profile covers.
    pub description: String,

    /// Compiled warning pattern with its field mapping.
    pub pattern: WarningPattern,

    /// Resolved charset for decoding report bytes.
    pub charset: &'static Encoding,

    /// Glob locating report files at their conventional location,
    /// relative to the project base directory.
    pub report_pattern: String,

    /// Whether this is a built-in profile (true) or user-defined (false).
    pub is_builtin: bool,
}
