// warnscan - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Crate metadata
// =============================================================================

/// Crate display name.
pub const APP_NAME: &str = "warnscan";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pattern limits
// =============================================================================

/// Maximum regex pattern length to prevent ReDoS.
pub const MAX_PATTERN_LENGTH: usize = 4_096;

/// Number of capture groups a warning pattern must declare:
/// file, line, warning id, message.
pub const REQUIRED_CAPTURE_GROUPS: usize = 4;

// =============================================================================
// Vendor defaults (Microsoft Visual C++)
// =============================================================================

/// Default warning pattern. Matches a single MSVC build-log line of the form
/// `<sep><filename>(<line>) : warning C<NNNN>:<message>`, where the path
/// separator before the filename may be `\` or `/`.
/// Group order: 1 = file, 2 = line, 3 = id, 4 = message.
pub const DEFAULT_PATTERN: &str = r"^.*[\\/](.*)\(([0-9]+)\) : warning (C\d{4}):(.*)$";

/// Default charset label for build logs. MSVC writes BuildLog.htm as
/// byte-order-marked UTF-16.
pub const DEFAULT_CHARSET: &str = "UTF-16";

/// Conventional report location, relative to the project base directory.
pub const DEFAULT_REPORT_PATH: &str = "compiler-reports/BuildLog.htm";

// =============================================================================
// Profile limits
// =============================================================================

/// Maximum number of compiler profiles that can be loaded (built-in + user).
pub const MAX_PROFILES: usize = 100;

/// Maximum size of a profile TOML file in bytes.
pub const MAX_PROFILE_FILE_SIZE: u64 = 64 * 1024; // 64 KB

// =============================================================================
// Report location limits
// =============================================================================

/// Maximum directory recursion depth when locating report files.
pub const MAX_LOCATE_DEPTH: usize = 16;

/// Maximum number of report files returned by a single locate call.
pub const MAX_REPORT_MATCHES: usize = 1_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
