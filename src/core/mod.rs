//! Core data types for STAR report statistics.
//!
//! - [`labels`]: the declarative table of recognized report labels
//! - [`ReportRecord`]: the ordered statistics extracted from one report
//! - [`StatValue`]: a count, verbatim rate, derived percentage, or file name
//!
//! ## Derived Percentages
//!
//! Count fields marked in [`labels::LABELS`] also produce a percentage field,
//! computed as `100 * count / Input Reads`:
//!
//! | Count | Percentage |
//! |-------|------------|
//! | Uniquely Mapped Reads | Percent Uniquely Mapped |
//! | Multi-Mapped Reads | Percent Multi-Mapped |
//! | Multi-Mapped, Too Many Loci Reads | Percent Too Many Loci |
//! | Unmapped, Too Many Mismatches | Percent Too Many Mismatches |
//! | Unmapped, Too Short | Percent Too Short |
//! | Unmapped, Other | Percent Unmapped Other |
//! | Chimeric Reads | Percent Chimeric |

pub mod labels;
pub mod record;

pub use record::{ReportRecord, StatValue};
