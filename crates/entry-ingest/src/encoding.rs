//! Input text encodings.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Encoding label used when none is configured.
pub const DEFAULT_ENCODING: &str = "windows-1251";

/// Resolve a WHATWG encoding label such as `windows-1251`, `cp1251` or `utf-8`.
///
/// UTF-16 and the `replacement` encoding are rejected: they cannot be decoded
/// without a byte order mark and never appear in entry files.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        IngestError::UnknownEncoding {
            label: label.to_string(),
        }
    })?;
    if encoding.output_encoding() != encoding {
        return Err(IngestError::UnsupportedEncoding {
            encoding: encoding.name(),
        });
    }
    Ok(encoding)
}

/// Decode file bytes strictly: malformed sequences are an error, not replaced.
///
/// A leading UTF-8 BOM left in the decoded text is dropped.
pub fn decode_bytes<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<Cow<'a, str>> {
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| IngestError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;
    Ok(match text {
        Cow::Borrowed(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Cow::Owned(text) => match text.strip_prefix('\u{feff}') {
            Some(stripped) => Cow::Owned(stripped.to_string()),
            None => Cow::Owned(text),
        },
    })
}
