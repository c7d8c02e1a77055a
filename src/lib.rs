//! # star-log-stats
//!
//! A library for collecting summary statistics from STAR aligner reports.
//!
//! STAR writes a `Log.final.out` file for every sample it aligns, listing read
//! counts and mapping rates as `label | value` lines. When a run covers dozens
//! of samples, comparing them means opening each report in turn.
//!
//! `star-log-stats` extracts a fixed set of metrics from each report, derives
//! the percentage of input reads in every mapping category, and writes all
//! samples to one CSV table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use star_log_stats::parsing::star_log::parse_file;
//! use star_log_stats::table::{writer, ResultTable};
//! use std::path::Path;
//!
//! let records = vec![
//!     parse_file(Path::new("sample1Log.final.out")).unwrap(),
//!     parse_file(Path::new("sample2Log.final.out")).unwrap(),
//! ];
//!
//! let table = ResultTable::new(records);
//! writer::write_csv(&table, Path::new("combined.csv")).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report records and the table of recognized labels
//! - [`parsing`]: Parser for STAR `Log.final.out` files
//! - [`table`]: Column union and CSV output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod table;

// Re-export commonly used types for convenience
pub use core::record::{ReportRecord, StatValue};
pub use parsing::star_log::{parse_file, parse_report_text, ParseError};
pub use table::ResultTable;
