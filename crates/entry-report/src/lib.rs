//! Outputs of a validation run: the per-field error summary and the JSON
//! dump of valid entries.

pub mod error;
pub mod export;
pub mod summary;

pub use error::{ReportError, Result};
pub use export::{ExportRecord, encode_valid_entries, write_valid_entries};
pub use summary::{ErrorSummary, SummaryTarget, write_summary, write_summary_to};
