//! Command-line interface for star-log-stats.
//!
//! The tool reads one or more STAR `Log.final.out` reports and writes their
//! summary statistics to a single CSV file, one row per report.
//!
//! ## Usage
//!
//! ```text
//! # Collect every *Log.final.out file in the current directory
//! star-log-stats
//!
//! # Explicit inputs and output name (".csv" is appended when missing)
//! star-log-stats -l s1Log.final.out s2Log.final.out -o alignment_summary
//! ```

pub mod inputs;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::parsing::star_log;
use crate::table::{writer, ResultTable};

/// Default name of the combined CSV
pub const DEFAULT_OUTPUT_FILE: &str = "STAR_alignment_combined_log.csv";

/// Extension required on the output file
pub const OUTPUT_EXTENSION: &str = ".csv";

#[derive(Parser, Debug)]
#[command(name = "star-log-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Combine STAR Log.final.out reports into a single CSV")]
#[command(
    long_about = "star-log-stats parses the Log.final.out reports written by the RNA-seq aligner STAR and combines them into one CSV file.\n\nEach report becomes one row holding read counts, per-base error rates and the percentage of input reads in each mapping category.\n\nExample: star-log-stats -l *Log.final.out"
)]
pub struct Cli {
    /// STAR final log files to parse. When omitted, every file ending in
    /// 'Log.final.out' in the current working directory is used
    #[arg(
        short = 'l',
        long = "log-files",
        visible_alias = "log_files",
        num_args = 1..,
        value_name = "FILE"
    )]
    pub log_files: Vec<PathBuf>,

    /// Name of the output CSV file (".csv" is appended if missing)
    #[arg(
        short = 'o',
        long = "output-file",
        visible_alias = "output_file",
        default_value = DEFAULT_OUTPUT_FILE
    )]
    pub output_file: PathBuf,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(
        "No STAR log files were specified or found in the working directory.\n\
         Please specify input files using the -l option or run star-log-stats \
         from a directory containing files ending in '{}'.",
        inputs::LOG_SUFFIX
    )]
    NoInputFiles,

    #[error("Invalid search pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Settings for one run, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reports to parse, in output row order
    pub inputs: Vec<PathBuf>,
    /// CSV file to write
    pub output: PathBuf,
}

impl Config {
    /// Resolve input files and the output name. `dir` is searched for reports
    /// when no log files were given.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NoInputFiles` when no reports are given or found.
    pub fn resolve(cli: Cli, dir: &Path) -> Result<Self, CliError> {
        let inputs = inputs::resolve_inputs(cli.log_files, dir)?;
        Ok(Self {
            inputs,
            output: normalize_output_path(cli.output_file),
        })
    }
}

/// Append ".csv" to `path` unless it already ends with it
#[must_use]
pub fn normalize_output_path(path: PathBuf) -> PathBuf {
    if path.to_string_lossy().ends_with(OUTPUT_EXTENSION) {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(OUTPUT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Execute a full run: resolve inputs, parse every report, write the table
///
/// # Errors
///
/// Returns an error if no inputs are found, any report fails to parse, or the
/// output cannot be written.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli, Path::new("."))?;
    execute(&config)
}

/// Parse the configured reports and write the combined CSV
///
/// # Errors
///
/// Returns an error if any report fails to parse or the output cannot be
/// written. Nothing is written when parsing fails.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let mut records = Vec::with_capacity(config.inputs.len());
    for path in &config.inputs {
        let record = star_log::parse_file(path)
            .with_context(|| format!("Failed to parse STAR log {}", path.display()))?;
        records.push(record);
    }

    let table = ResultTable::new(records);
    writer::write_csv(&table, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(
        "Wrote {} rows x {} columns to {}",
        table.len(),
        table.columns().len(),
        config.output.display()
    );

    Ok(())
}
