// warnscan - core/encoding.rs
//
// Charset label resolution and BOM-aware byte decoding.
// Core layer: operates on byte slices handed in by the app layer.
//
// Labels follow the WHATWG encoding standard, so "UTF-16" resolves to
// little-endian UTF-16 and a leading byte-order mark (UTF-16BE, UTF-16LE,
// or UTF-8) overrides the declared encoding. The BOM itself never appears
// in the decoded text.

use crate::util::error::DecodeError;
use encoding_rs::Encoding;

/// Resolve a WHATWG charset label to an encoding.
pub fn resolve_charset(label: &str) -> Result<&'static Encoding, DecodeError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| DecodeError::UnsupportedCharset {
        label: label.to_string(),
    })
}

/// Decode report bytes under `encoding`, honouring a leading BOM.
///
/// Decoding is strict: malformed sequences under the effective encoding are
/// an error, not replacement characters. A failed parse must be visible to
/// the host rather than silently yielding a warning list scanned from
/// mojibake.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: used.name(),
        });
    }
    tracing::trace!(
        declared = encoding.name(),
        effective = used.name(),
        input_bytes = bytes.len(),
        decoded_bytes = text.len(),
        "Decoded report content"
    );
    Ok(text.into_owned())
}

// =============================================================================
// Tests
// =============================================================================
