//! JSON export of valid entries.

use std::fs;
use std::path::Path;

use entry_model::{Entry, FieldName};
use serde::Serialize;
use tracing::info;

use crate::error::{ReportError, Result};

/// Exported shape of one valid entry.
///
/// Field order matches the report order; height and work experience are
/// written as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord<'a> {
    pub telephone: &'a str,
    pub height: f64,
    pub snils: &'a str,
    pub passport_series: &'a str,
    pub university: &'a str,
    pub work_experience: i64,
    pub academic_degree: &'a str,
    pub worldview: &'a str,
    pub address: &'a str,
}

impl<'a> TryFrom<&'a Entry> for ExportRecord<'a> {
    type Error = ReportError;

    fn try_from(entry: &'a Entry) -> Result<Self> {
        let height = entry
            .height()
            .trim()
            .parse::<f64>()
            .map_err(|_| non_numeric(FieldName::Height, entry.height()))?;
        let work_experience = entry
            .work_experience()
            .trim()
            .parse::<i64>()
            .map_err(|_| non_numeric(FieldName::WorkExperience, entry.work_experience()))?;
        Ok(Self {
            telephone: entry.telephone(),
            height,
            snils: entry.snils(),
            passport_series: entry.passport_series(),
            university: entry.university(),
            work_experience,
            academic_degree: entry.academic_degree(),
            worldview: entry.worldview(),
            address: entry.address(),
        })
    }
}

fn non_numeric(field: FieldName, value: &str) -> ReportError {
    ReportError::NonNumeric {
        field,
        value: value.to_string(),
    }
}

/// Encode entries as a pretty-printed JSON array followed by a newline.
pub fn encode_valid_entries(entries: &[Entry]) -> Result<Vec<u8>> {
    let records = entries
        .iter()
        .map(ExportRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    let mut bytes = serde_json::to_vec_pretty(&records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write valid entries to `path`, creating or truncating the file.
pub fn write_valid_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let bytes = encode_valid_entries(entries)?;
    fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        entry_count = entries.len(),
        "valid entries written"
    );
    Ok(())
}
