use std::fmt;

use crate::core::labels::INPUT_FILE_FIELD;

/// A single value stored in a [`ReportRecord`]
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// Read count parsed from the report
    Count(u64),
    /// Rate string copied verbatim from the report
    Rate(String),
    /// Derived percentage of input reads
    Percent(f64),
    /// Free text, used for the input file name
    Text(String),
}

impl StatValue {
    #[must_use]
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Rate(s) | Self::Text(s) => write!(f, "{s}"),
            Self::Percent(p) => write!(f, "{}", format_percent(*p)),
        }
    }
}

/// Shortest round-trip decimal form of `p`, never in exponent notation and
/// always with a decimal point (`85.0`, `0.000001`)
fn format_percent(p: f64) -> String {
    let mut s = p.to_string();
    if p.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Summary statistics extracted from one STAR report.
///
/// Fields keep the order in which they were first produced. `"Input File"` is
/// always the first field; every other field is present only if the report
/// contained the corresponding line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    fields: Vec<(String, StatValue)>,
}

impl ReportRecord {
    pub(crate) fn new(input_file: impl Into<String>) -> Self {
        Self {
            fields: vec![(
                INPUT_FILE_FIELD.to_string(),
                StatValue::Text(input_file.into()),
            )],
        }
    }

    /// Set a field, keeping its original position if it already exists
    pub(crate) fn insert(&mut self, field: impl Into<String>, value: StatValue) {
        let field = field.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field, value));
        }
    }

    #[must_use]
    pub fn input_file(&self) -> &str {
        match self.get(INPUT_FILE_FIELD) {
            Some(StatValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&StatValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterate over `(field, value)` pairs in record order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields, including the input file
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record holds nothing but the input file
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.len() <= 1
    }
}
