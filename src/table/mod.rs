//! Aggregation of per-report records into a single result table.
//!
//! Records may carry different sets of fields, so [`ResultTable::new`]
//! computes the union of all field names (in first-seen order) up front. The
//! [`writer`] then emits one row per record with empty cells for the fields a
//! record lacks.

pub mod writer;

use crate::core::record::{ReportRecord, StatValue};

/// Records from all input reports, widened to a common set of columns
#[derive(Debug, Clone)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<ReportRecord>,
}

impl ResultTable {
    /// Build a table from records in input order
    #[must_use]
    pub fn new(rows: Vec<ReportRecord>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &rows {
            for (field, _) in record.fields() {
                if !columns.iter().any(|c| c == field) {
                    columns.push(field.to_string());
                }
            }
        }
        Self { columns, rows }
    }

    /// Union of all record fields, in first-seen order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[ReportRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `row` for `column`, or `None` for an empty cell
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&StatValue> {
        self.rows.get(row).and_then(|record| record.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::star_log::parse_report_text;

    fn two_records() -> Vec<ReportRecord> {
        let first = parse_report_text(
            "aLog.final.out",
            "Number of input reads | 100\nUniquely mapped reads number | 80\n",
        )
        .unwrap();
        let second = parse_report_text(
            "bLog.final.out",
            "Number of input reads | 200\nUniquely mapped reads number | 100\nNumber of chimeric reads | 10\n",
        )
        .unwrap();
        vec![first, second]
    }

    #[test]
    fn test_column_union() {
        let table = ResultTable::new(two_records());
        assert_eq!(
            table.columns(),
            &[
                "Input File",
                "Input Reads",
                "Uniquely Mapped Reads",
                "Percent Uniquely Mapped",
                "Chimeric Reads",
                "Percent Chimeric",
            ]
        );
    }

    #[test]
    fn test_rows_preserve_order() {
        let table = ResultTable::new(two_records());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].input_file(), "aLog.final.out");
        assert_eq!(table.rows()[1].input_file(), "bLog.final.out");
    }

    #[test]
    fn test_missing_cells() {
        let table = ResultTable::new(two_records());
        assert!(table.cell(0, "Chimeric Reads").is_none());
        assert!(table.cell(0, "Percent Chimeric").is_none());
        assert_eq!(
            table.cell(1, "Chimeric Reads"),
            Some(&StatValue::Count(10))
        );
        assert_eq!(
            table.cell(1, "Percent Chimeric"),
            Some(&StatValue::Percent(5.0))
        );
        assert!(table.cell(2, "Input File").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = ResultTable::new(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }
}
