//! The validation run: load, classify, report.
//!
//! All run state lives in [`RunConfig`], which the CLI builds from its
//! arguments and hands to [`run`].

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, trace};

use entry_ingest::{DEFAULT_ENCODING, read_entries, resolve_encoding};
use entry_model::Entry;
use entry_report::{ErrorSummary, SummaryTarget, write_summary, write_valid_entries};
use entry_validate::classify;

use crate::logging::redact_value;

pub const DEFAULT_INPUT_FILE: &str = "36.txt";
pub const DEFAULT_SUMMARY_FILE: &str = "36_result.txt";
pub const DEFAULT_VALID_FILE: &str = "valid_data.txt";

/// Progress units: loading accounts for 60 of 100, classification for 40.
const PROGRESS_TOTAL: u64 = 100;
const LOAD_PROGRESS: u64 = 60;
const CLASSIFY_PROGRESS: u64 = 40;

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_file: PathBuf,
    /// Encoding label of the input file, e.g. `windows-1251`.
    pub encoding: String,
    pub summary: SummaryTarget,
    pub valid_file: PathBuf,
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            encoding: DEFAULT_ENCODING.to_string(),
            summary: SummaryTarget::File(PathBuf::from(DEFAULT_SUMMARY_FILE)),
            valid_file: PathBuf::from(DEFAULT_VALID_FILE),
            show_progress: true,
        }
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub summary: ErrorSummary,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub summary_target: SummaryTarget,
    pub valid_file: PathBuf,
}

/// Run one validation pass.
///
/// # Errors
///
/// Fails without writing any output when the encoding is unknown, the input
/// cannot be read or decoded, or any entry lacks a field. Fails after
/// classification when an output file cannot be written.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input_file.display());
    let _run_guard = run_span.enter();

    let encoding = resolve_encoding(&config.encoding).context("resolve input encoding")?;
    let progress = progress_bar(config.show_progress);

    // Stage 1: load
    let load_start = Instant::now();
    let entries = read_entries(&config.input_file, encoding)
        .with_context(|| format!("load entries from {}", config.input_file.display()))?;
    let total = entries.len();
    info!(
        entry_count = total,
        encoding = encoding.name(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );
    progress.inc(LOAD_PROGRESS);

    // Stage 2: classify
    let classification = classify(entries);
    trace_valid_entries(&classification.valid);
    progress.inc(CLASSIFY_PROGRESS);
    progress.finish_and_clear();

    // Stage 3: report
    let summary = ErrorSummary::from_failures(&classification.invalid);
    write_summary(&summary, &config.summary).context("write error summary")?;
    write_valid_entries(&config.valid_file, &classification.valid)
        .with_context(|| format!("write valid entries to {}", config.valid_file.display()))?;

    Ok(RunResult {
        total,
        valid: classification.valid_count(),
        invalid: classification.invalid_count(),
        summary,
        summary_target: config.summary.clone(),
        valid_file: config.valid_file.clone(),
    })
}

fn progress_bar(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(PROGRESS_TOTAL);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}/{len}") {
        bar.set_style(style);
    }
    bar
}

fn trace_valid_entries(entries: &[Entry]) {
    for (index, entry) in entries.iter().enumerate() {
        trace!(
            index,
            telephone = redact_value(entry.telephone()),
            snils = redact_value(entry.snils()),
            "valid entry"
        );
    }
}
