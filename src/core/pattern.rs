// warnscan - core/pattern.rs
//
// Warning pattern compilation and capture extraction.
//
// Group arity is validated here, once, at configuration time: a
// `WarningPattern` that exists is guaranteed to produce all four warning
// fields for every match, so the scan loop never hits a missing-group
// failure mid-file.

use crate::core::model::{FieldMapping, Warning, WarningField};
use crate::util::constants;
use crate::util::error::PatternError;
use regex::{Captures, Regex, RegexBuilder};

/// A compiled warning pattern: regex plus the mapping from its capture
/// groups onto `Warning` fields.
///
/// Compiled with multi-line mode enabled, so `^`/`$` anchor at line
/// boundaries while `.` still excludes line terminators, and CRLF mode,
/// so `$` matches before a `\r\n` pair and `\r` never leaks into a
/// captured field (Windows build logs are CRLF).
#[derive(Debug, Clone)]
pub struct WarningPattern {
    regex: Regex,
    mapping: FieldMapping,
}

impl WarningPattern {
    /// Compile `pattern` and validate its capture groups.
    ///
    /// If the pattern declares all four named groups (`file`, `line`, `id`,
    /// `message`), fields are populated by name and `group_order` is ignored.
    /// Otherwise numeric groups 1..=4 are mapped onto fields in
    /// `group_order` (default: file, line, id, message), and the pattern
    /// must declare at least four groups.
    pub fn compile(
        pattern: &str,
        group_order: Option<[WarningField; 4]>,
    ) -> Result<Self, PatternError> {
        if pattern.len() > constants::MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max_length: constants::MAX_PATTERN_LENGTH,
            });
        }

        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .crlf(true)
            .build()
            .map_err(|e| PatternError::Invalid {
                pattern: pattern.to_string(),
                source: e,
            })?;

        let mapping = if has_named_group_set(&regex) {
            FieldMapping::Named
        } else {
            // captures_len() counts the implicit whole-match group 0.
            let found = regex.captures_len() - 1;
            if found < constants::REQUIRED_CAPTURE_GROUPS {
                return Err(PatternError::MissingCaptureGroups {
                    pattern: pattern.to_string(),
                    found,
                    required: constants::REQUIRED_CAPTURE_GROUPS,
                });
            }
            FieldMapping::Positional(group_order.unwrap_or_else(WarningField::default_order))
        };

        Ok(Self { regex, mapping })
    }

    /// Compile with the default positional order (file, line, id, message).
    pub fn compile_default_order(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, None)
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Build a `Warning` from one match.
    ///
    /// A group that did not participate in the match contributes an empty
    /// string to its field.
    pub fn extract(&self, caps: &Captures<'_>) -> Warning {
        match &self.mapping {
            FieldMapping::Named => Warning::new(
                group_by_name(caps, WarningField::File),
                group_by_name(caps, WarningField::Line),
                group_by_name(caps, WarningField::Id),
                group_by_name(caps, WarningField::Message),
            ),
            FieldMapping::Positional(order) => {
                let mut fields = ["", "", "", ""];
                for (i, field) in order.iter().enumerate() {
                    let text = caps.get(i + 1).map_or("", |m| m.as_str());
                    fields[slot(*field)] = text;
                }
                Warning::new(fields[0], fields[1], fields[2], fields[3])
            }
        }
    }
}

/// Returns true if the regex declares every one of the four field names
/// as a named capture group.
fn has_named_group_set(regex: &Regex) -> bool {
    let names: Vec<&str> = regex.capture_names().flatten().collect();
    WarningField::default_order()
        .iter()
        .all(|f| names.contains(&f.group_name()))
}

fn group_by_name<'t>(caps: &Captures<'t>, field: WarningField) -> &'t str {
    caps.name(field.group_name()).map_or("", |m| m.as_str())
}

/// Index of a field in (file, line, id, message) order.
fn slot(field: WarningField) -> usize {
    match field {
        WarningField::File => 0,
        WarningField::Line => 1,
        WarningField::Id => 2,
        WarningField::Message => 3,
    }
}

// =============================================================================
// Tests
// =============================================================================
