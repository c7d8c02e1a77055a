/// Kind of value stored for a recognized label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Base-10 read count
    Count,
    /// Rate string kept verbatim (e.g. "0.25%")
    Rate,
}

/// One recognized report line and the record fields it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Trimmed left-hand text of the report line
    pub label: &'static str,
    /// Field name stored in the record
    pub field: &'static str,
    pub kind: ValueKind,
    /// Derived percentage (of Input Reads) field, if any
    pub percent_field: Option<&'static str>,
}

impl LabelSpec {
    const fn count(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            field,
            kind: ValueKind::Count,
            percent_field: None,
        }
    }

    const fn count_with_percent(
        label: &'static str,
        field: &'static str,
        percent_field: &'static str,
    ) -> Self {
        Self {
            label,
            field,
            kind: ValueKind::Count,
            percent_field: Some(percent_field),
        }
    }

    const fn rate(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            field,
            kind: ValueKind::Rate,
            percent_field: None,
        }
    }
}

/// Field holding the source path of a record
pub const INPUT_FILE_FIELD: &str = "Input File";

/// Field holding the total read count, denominator of every percentage
pub const INPUT_READS_FIELD: &str = "Input Reads";

/// Labels recognized in a STAR `Log.final.out` report
pub const LABELS: &[LabelSpec] = &[
    LabelSpec::count("Number of input reads", INPUT_READS_FIELD),
    LabelSpec::count_with_percent(
        "Uniquely mapped reads number",
        "Uniquely Mapped Reads",
        "Percent Uniquely Mapped",
    ),
    LabelSpec::rate("Mismatch rate per base, %", "Mismatch Rate"),
    LabelSpec::rate("Deletion rate per base", "Deletion Rate"),
    LabelSpec::rate("Insertion rate per base", "Insertion Rate"),
    LabelSpec::count_with_percent(
        "Number of reads mapped to multiple loci",
        "Multi-Mapped Reads",
        "Percent Multi-Mapped",
    ),
    LabelSpec::count_with_percent(
        "Number of reads mapped to too many loci",
        "Multi-Mapped, Too Many Loci Reads",
        "Percent Too Many Loci",
    ),
    LabelSpec::count_with_percent(
        "Number of reads unmapped: too many mismatches",
        "Unmapped, Too Many Mismatches",
        "Percent Too Many Mismatches",
    ),
    LabelSpec::count_with_percent(
        "Number of reads unmapped: too short",
        "Unmapped, Too Short",
        "Percent Too Short",
    ),
    LabelSpec::count_with_percent(
        "Number of reads unmapped: other",
        "Unmapped, Other",
        "Percent Unmapped Other",
    ),
    LabelSpec::count_with_percent(
        "Number of chimeric reads",
        "Chimeric Reads",
        "Percent Chimeric",
    ),
];

/// Look up a trimmed label in [`LABELS`]
#[must_use]
pub fn find_label(label: &str) -> Option<&'static LabelSpec> {
    LABELS.iter().find(|spec| spec.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = LABELS.iter().map(|s| s.label).collect();
        let fields: HashSet<_> = LABELS.iter().map(|s| s.field).collect();
        assert_eq!(labels.len(), LABELS.len());
        assert_eq!(fields.len(), LABELS.len());
    }

    #[test]
    fn test_percentages_only_on_counts() {
        for spec in LABELS {
            if spec.percent_field.is_some() {
                assert_eq!(spec.kind, ValueKind::Count, "{}", spec.label);
            }
        }
        // Input reads is the denominator, never a numerator
        let input = LABELS
            .iter()
            .find(|spec| spec.field == INPUT_READS_FIELD)
            .unwrap();
        assert!(input.percent_field.is_none());
    }

    #[test]
    fn test_find_label() {
        let spec = find_label("Number of chimeric reads").unwrap();
        assert_eq!(spec.field, "Chimeric Reads");
        assert_eq!(spec.percent_field, Some("Percent Chimeric"));

        let rate = find_label("Mismatch rate per base, %").unwrap();
        assert_eq!(rate.kind, ValueKind::Rate);

        // Matching is exact on the trimmed label
        assert!(find_label("number of input reads").is_none());
        assert!(find_label("Average input read length").is_none());
    }
}
