use std::fmt;

use crate::model::ColumnRule;

/// Which input dataset an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Registry,
    Report,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Registry => "registry",
            Dataset::Report => "report",
        }
    }
}

/// Per-line parse failure. The parsers abort on the first one; there is no
/// partial record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tab-split column count violates the layout rule. `line` is 1-based
    /// over the trimmed input.
    MalformedLine {
        line: usize,
        found: usize,
        expected: ColumnRule,
    },
    /// Non-empty amount field that is not numeric after normalization.
    UnparsableAmount { line: usize, value: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, found, expected } => {
                write!(
                    f,
                    "line {line}: expected {expected} tab-separated columns, found {found}"
                )
            }
            Self::UnparsableAmount { line, value } => {
                write!(f, "line {line}: cannot parse amount {value:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Comparison-level failure: blank input, or a parse error on one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// The named input is empty or whitespace-only; nothing was parsed.
    EmptyInput(Dataset),
    /// A line in the named input failed to parse.
    Parse { dataset: Dataset, source: ParseError },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput(dataset) => write!(f, "{} input is empty", dataset.as_str()),
            Self::Parse { dataset, source } => write!(f, "{}: {}", dataset.as_str(), source),
        }
    }
}

impl std::error::Error for CompareError {}
