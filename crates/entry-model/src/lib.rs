pub mod entry;
pub mod error;
pub mod field;
pub mod outcome;

pub use entry::Entry;
pub use error::{EntryError, Result};
pub use field::FieldName;
pub use outcome::{Classification, ValidationOutcome};
