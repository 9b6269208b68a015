use thiserror::Error;

use crate::field::FieldName;

/// Errors raised while building an [`Entry`](crate::Entry) from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// A required key is absent from the input mapping.
    #[error("missing required field '{field}'")]
    MissingField { field: FieldName },

    /// A key is present but holds a value that cannot be read as text.
    #[error("field '{field}' must be a string or number, found {found}")]
    InvalidFieldType {
        field: FieldName,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EntryError>;
