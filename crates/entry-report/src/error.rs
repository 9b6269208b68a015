use std::path::PathBuf;

use entry_model::FieldName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write summary")]
    Stdout(#[source] std::io::Error),
    #[error("failed to serialize entries")]
    Serialize(#[from] serde_json::Error),
    /// A numeric field of an entry handed to export does not parse.
    #[error("field '{field}' is not numeric: {value:?}")]
    NonNumeric { field: FieldName, value: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
