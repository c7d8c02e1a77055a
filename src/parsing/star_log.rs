//! Parser for STAR `Log.final.out` summary reports.
//!
//! A report is a list of `label | value` lines grouped under section headers:
//!
//! ```text
//!                           Number of input reads |	1000000
//!                       Average input read length |	150
//!                                     UNIQUE READS:
//!                    Uniquely mapped reads number |	850000
//!                         Uniquely mapped reads % |	85.00%
//! ```
//!
//! Only the labels listed in [`LABELS`](crate::core::labels::LABELS) are
//! extracted. Derived percentages are computed once the whole report has been
//! read, so the position of `Number of input reads` within the file does not
//! matter.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::labels::{find_label, LabelSpec, ValueKind, INPUT_READS_FIELD};
use crate::core::record::{ReportRecord, StatValue};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid read count in {file} on line {line}: '{label}' has value '{value}'")]
    InvalidCount {
        file: String,
        line: usize,
        label: String,
        value: String,
    },

    #[error("Cannot compute percentages for {file}: number of input reads is 0")]
    ZeroInputReads { file: String },
}

/// Parse a STAR final log file
///
/// The record's input file is the path as given.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`parse_report_text`] for invalid content.
pub fn parse_file(path: &Path) -> Result<ReportRecord, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report_text(&path.display().to_string(), &text)
}

/// Parse the text of a STAR final log
///
/// # Errors
///
/// Returns `ParseError::InvalidCount` if a recognized count line does not hold
/// a base-10 integer, or `ParseError::ZeroInputReads` if a percentage has to
/// be computed against zero input reads.
pub fn parse_report_text(input_file: &str, text: &str) -> Result<ReportRecord, ParseError> {
    let mut found: Vec<(&'static LabelSpec, StatValue)> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let Some((label, value)) = split_line(line) else {
            continue;
        };
        let Some(spec) = find_label(label) else {
            continue;
        };

        let value = match spec.kind {
            ValueKind::Count => {
                let count: u64 = value.parse().map_err(|_| ParseError::InvalidCount {
                    file: input_file.to_string(),
                    // Line numbers in errors are 1-based for user friendliness
                    line: i + 1,
                    label: label.to_string(),
                    value: value.to_string(),
                })?;
                StatValue::Count(count)
            }
            ValueKind::Rate => StatValue::Rate(value.to_string()),
        };

        // A repeated label keeps its first position and its last value
        if let Some(slot) = found.iter_mut().find(|(s, _)| s.field == spec.field) {
            slot.1 = value;
        } else {
            found.push((spec, value));
        }
    }

    let input_reads = found
        .iter()
        .find(|(spec, _)| spec.field == INPUT_READS_FIELD)
        .and_then(|(_, value)| value.as_count());

    let mut record = ReportRecord::new(input_file);
    for (spec, value) in found {
        let count = value.as_count();
        record.insert(spec.field, value);

        if let (Some(percent_field), Some(count), Some(total)) =
            (spec.percent_field, count, input_reads)
        {
            let percent = percent_of(count, total).ok_or_else(|| ParseError::ZeroInputReads {
                file: input_file.to_string(),
            })?;
            record.insert(percent_field, StatValue::Percent(percent));
        }
    }

    if record.is_empty() {
        warn!("No recognized STAR statistics found in {input_file}");
    }
    debug!("Parsed {} fields from {input_file}", record.len());

    Ok(record)
}

/// Split a report line into its trimmed label and value.
///
/// Returns `None` for lines without a `|` delimiter. Text after a second `|`
/// is ignored.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('|');
    let label = fields.next()?;
    let value = fields.next()?;
    Some((label.trim(), value.trim()))
}

/// `100 * count / total`, or `None` when `total` is zero
#[allow(clippy::cast_precision_loss)]
fn percent_of(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(100.0 * count as f64 / total as f64)
}
