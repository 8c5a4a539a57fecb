use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input modes
// ---------------------------------------------------------------------------

/// Column layout of the registry block. The registry arrives pasted from
/// several generations of payroll exports, so the name and amount columns
/// move around per layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryLayout {
    /// name, personal id (unused), amount
    ThreeColumn,
    /// free-text name field, amount; duplicate names are summed
    TwoColumn,
    /// legacy fixed export: name in column 1, amount in column 9
    NineColumn,
    /// legacy export variant: name in column 1, amount in column 8,
    /// columns beyond 8 ignored; duplicate names are summed
    EightPlusColumn,
}

impl RegistryLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryLayout::ThreeColumn => "three_column",
            RegistryLayout::TwoColumn => "two_column",
            RegistryLayout::NineColumn => "nine_column",
            RegistryLayout::EightPlusColumn => "eight_plus_column",
        }
    }

    /// Tab-split column count rule for one line.
    pub fn columns(&self) -> ColumnRule {
        match self {
            RegistryLayout::ThreeColumn => ColumnRule::Exactly(3),
            RegistryLayout::TwoColumn => ColumnRule::Exactly(2),
            RegistryLayout::NineColumn => ColumnRule::Exactly(9),
            RegistryLayout::EightPlusColumn => ColumnRule::AtLeast(8),
        }
    }

    /// 0-based index of the amount column.
    pub fn amount_col(&self) -> usize {
        match self {
            RegistryLayout::ThreeColumn => 2,
            RegistryLayout::TwoColumn => 1,
            RegistryLayout::NineColumn => 8,
            RegistryLayout::EightPlusColumn => 7,
        }
    }

    /// Whether the name field carries trailing free text after the name
    /// proper (only the leading name words are kept).
    pub fn free_text_name(&self) -> bool {
        matches!(self, RegistryLayout::TwoColumn | RegistryLayout::EightPlusColumn)
    }

    /// Whether lines sharing a normalized name merge into one record with
    /// their amounts summed.
    pub fn merges_duplicates(&self) -> bool {
        matches!(self, RegistryLayout::TwoColumn | RegistryLayout::EightPlusColumn)
    }
}

/// Expected tab-split column count for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    Exactly(usize),
    AtLeast(usize),
}

impl ColumnRule {
    pub fn accepts(&self, found: usize) -> bool {
        match self {
            ColumnRule::Exactly(n) => found == *n,
            ColumnRule::AtLeast(n) => found >= *n,
        }
    }
}

impl fmt::Display for ColumnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRule::Exactly(n) => write!(f, "{n}"),
            ColumnRule::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Reconciliation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
    /// Classify report rows only; registry-only names produce no row.
    OneWay,
    /// Additionally append one row per registry record absent from the
    /// report.
    Bidirectional,
}

impl ReconcileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileMode::OneWay => "one_way",
            ReconcileMode::Bidirectional => "bidirectional",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One parsed line (or merged duplicate group) from either dataset.
/// Amounts are integer cents throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub amount_cents: i64,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Match,
    Mismatch,
    MissingInRegistry,
    MissingInReport,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Match => "match",
            Status::Mismatch => "mismatch",
            Status::MissingInRegistry => "missing_in_registry",
            Status::MissingInReport => "missing_in_report",
        }
    }

    /// Display label in the given vocabulary. The Russian reading of
    /// `MissingInRegistry` is the operational one: a person still in the
    /// report but gone from the registry has usually been terminated or
    /// moved to a civil-law contract.
    pub fn label(&self, lang: LabelLanguage) -> &'static str {
        match (self, lang) {
            (Status::Match, LabelLanguage::En) => "Match",
            (Status::Mismatch, LabelLanguage::En) => "Mismatch",
            (Status::MissingInRegistry, LabelLanguage::En) => "Missing in registry",
            (Status::MissingInReport, LabelLanguage::En) => "Missing in report",
            (Status::Match, LabelLanguage::Ru) => "Совпадает",
            (Status::Mismatch, LabelLanguage::Ru) => "Различается",
            (Status::MissingInRegistry, LabelLanguage::Ru) => "Уволен или работает по ГПХ",
            (Status::MissingInReport, LabelLanguage::Ru) => "Отсутствует в полном своде",
        }
    }
}

/// One classified row of the comparison output.
///
/// `difference_cents` is report minus registry when both sides have the
/// name, the report amount for report-only names, and the negated registry
/// amount for registry-only names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub difference_cents: i64,
    pub status: Status,
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Display vocabulary for status labels, export headers, and the summary
/// row. Machine labels (`as_str`) are never localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLanguage {
    #[default]
    En,
    Ru,
}

/// The full label set for one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub language: LabelLanguage,
    pub name: &'static str,
    pub difference: &'static str,
    pub status: &'static str,
    pub total: &'static str,
    pub sheet: &'static str,
}

const LABELS_EN: Labels = Labels {
    language: LabelLanguage::En,
    name: "Name",
    difference: "Difference",
    status: "Status",
    total: "Total difference:",
    sheet: "Comparison",
};

const LABELS_RU: Labels = Labels {
    language: LabelLanguage::Ru,
    name: "ФИО",
    difference: "Разница",
    status: "Статус",
    total: "Итоговая сумма разницы:",
    sheet: "Сравнение",
};

impl LabelLanguage {
    pub fn labels(&self) -> &'static Labels {
        match self {
            LabelLanguage::En => &LABELS_EN,
            LabelLanguage::Ru => &LABELS_RU,
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub missing_in_registry: usize,
    pub missing_in_report: usize,
    pub net_difference_cents: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub meta: RunMeta,
    pub summary: Summary,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub layout: RegistryLayout,
    pub mode: ReconcileMode,
    pub engine_version: String,
    pub run_at: String,
}
