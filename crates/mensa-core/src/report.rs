use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a single line was skipped or flagged while a day was being
/// normalized. These never abort the day; they are carried alongside the
/// result so callers can log them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A price string did not split into a student/staff pair.
    MalformedPrice,
    /// A poster category with no counterpart in the stored vocabulary.
    UnsupportedCategory,
    /// A feed entry with no enabled courses left after filtering.
    EmptyMenuItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl IngestWarning {
    pub(crate) fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        IngestWarning {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of committing one (campus, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayReport {
    pub campus: String,
    pub date: NaiveDate,
    pub stored_items: usize,
    /// True when a previously stored menu for the pair was replaced.
    pub replaced_existing: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IngestWarning>,
}

/// A (campus, date) that could not be committed. The stored menu for the
/// pair is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayFailure {
    pub campus: String,
    pub date: NaiveDate,
    pub error: String,
}

/// Outcome of one sequential ingestion run across campuses and days.
/// Failures do not roll back days committed earlier in the same run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub days: Vec<DayReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<DayFailure>,
}

impl RunReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
