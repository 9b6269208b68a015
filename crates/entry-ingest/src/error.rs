//! Error types for entry ingestion.

use std::path::PathBuf;

use entry_model::EntryError;
use thiserror::Error;

/// Errors that can occur while loading entries.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// Encoding label not recognised.
    #[error("unknown encoding '{label}'")]
    UnknownEncoding { label: String },

    /// Encoding recognised but not usable for input decoding.
    #[error("unsupported input encoding {encoding}")]
    UnsupportedEncoding { encoding: &'static str },

    /// File bytes are not valid in the configured encoding.
    #[error("{path} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Document Errors ===
    /// Not a JSON document.
    #[error("failed to parse JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array.
    #[error("expected a JSON array of entries in {path}")]
    NotAnArray { path: PathBuf },

    /// Array element is not a JSON object.
    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// Entry could not be built from its object.
    #[error("entry {index} is malformed")]
    Entry {
        index: usize,
        #[source]
        source: EntryError,
    },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use entry_model::FieldName;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/36.txt"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/36.txt");
    }

    #[test]
    fn test_entry_error_keeps_source() {
        let err = IngestError::Entry {
            index: 3,
            source: EntryError::MissingField {
                field: FieldName::Address,
            },
        };
        assert_eq!(err.to_string(), "entry 3 is malformed");
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "missing required field 'address'");
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let err = IngestError::from_io(
            std::path::Path::new("missing.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let err = IngestError::from_io(
            std::path::Path::new("locked.txt"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
