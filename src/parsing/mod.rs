//! Parsers for STAR aligner summary reports.
//!
//! STAR writes a `Log.final.out` file per sample with pipe-delimited
//! `label | value` lines. [`star_log`] extracts the recognized metrics into a
//! [`ReportRecord`](crate::core::ReportRecord).
//!
//! ## Example
//!
//! ```rust,no_run
//! use star_log_stats::parsing::star_log::{parse_file, parse_report_text};
//! use std::path::Path;
//!
//! // Parse a report on disk
//! let record = parse_file(Path::new("sample1Log.final.out")).unwrap();
//!
//! // Or parse report text directly
//! let text = "Number of input reads | 1000000\nUniquely mapped reads number | 850000\n";
//! let record = parse_report_text("sample1", text).unwrap();
//! ```

pub mod star_log;
