//! Loading user entries from disk.
//!
//! Input is a JSON array of objects stored in a legacy single-byte encoding
//! (`windows-1251` unless configured otherwise). Every failure here is fatal
//! for the whole batch.

pub mod encoding;
pub mod error;
pub mod reader;

pub use encoding::{DEFAULT_ENCODING, decode_bytes, resolve_encoding};
pub use error::{IngestError, Result};
pub use reader::{MAX_INPUT_FILE_SIZE, check_file_size, parse_entries, read_entries};
