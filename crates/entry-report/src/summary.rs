//! Per-field error tally.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use entry_model::FieldName;
use tracing::info;

use crate::error::{ReportError, Result};

/// Count of failures per field, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSummary {
    counts: [(FieldName, usize); 9],
}

impl Default for ErrorSummary {
    fn default() -> Self {
        Self {
            counts: FieldName::ALL.map(|field| (field, 0)),
        }
    }
}

impl ErrorSummary {
    /// Tally every reason of every invalid entry.
    pub fn from_failures(failures: &[Vec<FieldName>]) -> Self {
        let mut summary = Self::default();
        for field in failures.iter().flatten() {
            summary.record(*field);
        }
        summary
    }

    pub fn record(&mut self, field: FieldName) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(name, _)| *name == field) {
            *count += 1;
        }
    }

    pub fn count(&self, field: FieldName) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(0, |(_, count)| *count)
    }

    /// Total number of errors; always the sum of the field counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Field counts in report order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Render the summary as text: the total on the first line, then one
    /// `field: count` line per field.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total errors: {}", self.total())?;
        for (field, count) in self.iter() {
            writeln!(f, "{field}: {count}")?;
        }
        Ok(())
    }
}

/// Where the rendered summary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryTarget {
    Stdout,
    File(PathBuf),
}

/// Write the rendered summary to a writer.
pub fn write_summary_to<W: Write>(summary: &ErrorSummary, mut writer: W) -> io::Result<()> {
    writer.write_all(summary.render().as_bytes())?;
    writer.flush()
}

/// Write the summary to its target. A file target is created or truncated.
pub fn write_summary(summary: &ErrorSummary, target: &SummaryTarget) -> Result<()> {
    match target {
        SummaryTarget::Stdout => {
            write_summary_to(summary, io::stdout().lock()).map_err(ReportError::Stdout)
        }
        SummaryTarget::File(path) => {
            let io_error = |source| ReportError::Io {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(io_error)?;
            write_summary_to(summary, BufWriter::new(file)).map_err(io_error)?;
            info!(path = %path.display(), total = summary.total(), "error summary written");
            Ok(())
        }
    }
}
