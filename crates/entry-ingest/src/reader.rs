//! Entry file reading.

use std::path::Path;

use encoding_rs::Encoding;
use entry_model::Entry;
use serde_json::Value;
use tracing::{debug, info};

use crate::encoding::decode_bytes;
use crate::error::{IngestError, Result};

/// Maximum input file size (256 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Check file existence and size before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read and decode an entry file, then build every entry.
///
/// The first malformed entry aborts the load; nothing is returned for the
/// entries before it.
pub fn read_entries(path: &Path, encoding: &'static Encoding) -> Result<Vec<Entry>> {
    check_file_size(path, MAX_INPUT_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.name(),
        "read input file"
    );

    let text = decode_bytes(&bytes, encoding, path)?;
    let entries = parse_entries(&text, path)?;
    info!(path = %path.display(), entry_count = entries.len(), "entries loaded");
    Ok(entries)
}

/// Parse a JSON array of entry objects.
///
/// `path` is only used for error messages.
pub fn parse_entries(text: &str, path: &Path) -> Result<Vec<Entry>> {
    let document: Value = serde_json::from_str(text).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let Value::Array(items) = document else {
        return Err(IngestError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(map) = item else {
                return Err(IngestError::NotAnObject { index });
            };
            Entry::try_from_map(map).map_err(|source| IngestError::Entry { index, source })
        })
        .collect()
}
