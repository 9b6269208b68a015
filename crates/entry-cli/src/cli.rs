//! CLI argument definitions for the entry validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use entry_cli::pipeline::{DEFAULT_INPUT_FILE, DEFAULT_SUMMARY_FILE, DEFAULT_VALID_FILE};
use entry_ingest::DEFAULT_ENCODING;

#[derive(Parser)]
#[command(
    name = "entry-validator",
    version,
    about = "Validate user entries and report invalid fields",
    long_about = "Validate a JSON batch of user entries field by field.\n\n\
                  Writes a per-field error summary and a JSON file with the valid entries.\n\
                  Without a subcommand, runs `validate` with default file names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow entry values (personal data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an entry file and write the summary and valid entries.
    Validate(ValidateArgs),

    /// List the validation rule for every field.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// JSON file with the entries to validate.
    #[arg(
        short = 'i',
        long = "input-file",
        value_name = "PATH",
        default_value = DEFAULT_INPUT_FILE
    )]
    pub input_file: PathBuf,

    /// File that receives the error summary.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        default_value = DEFAULT_SUMMARY_FILE
    )]
    pub output_file: PathBuf,

    /// Print the error summary to standard output instead of a file.
    #[arg(long = "stdout", conflicts_with = "output_file")]
    pub stdout: bool,

    /// File that receives the valid entries as JSON.
    #[arg(long = "valid-file", value_name = "PATH", default_value = DEFAULT_VALID_FILE)]
    pub valid_file: PathBuf,

    /// Text encoding of the input file.
    #[arg(long = "encoding", value_name = "LABEL", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Do not draw the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
            stdout: false,
            valid_file: PathBuf::from(DEFAULT_VALID_FILE),
            encoding: DEFAULT_ENCODING.to_string(),
            no_progress: false,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
