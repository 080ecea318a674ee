use chrono::{DateTime, Utc};

use super::domain::CategoryScores;

/// One row of the hosted score table after boundary coercion. Multiple rows
/// may share a `name` (resubmissions); reconciliation keeps one.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScoreRow {
    pub name: String,
    pub response_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub scores: CategoryScores,
    pub purpose_highlight: Option<String>,
    pub people_highlight: Option<String>,
    pub priorities_highlight: Option<String>,
}

/// One row of the hosted candidate-response table. Read-only within the
/// engine; used only to enrich score rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub id: String,
    pub organization: String,
    pub sub_organization: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

/// Read access to the hosted score table.
pub trait ScoreSource: Send + Sync {
    fn score_rows(&self) -> Result<Vec<RawScoreRow>, SourceError>;
}

/// Read access to the hosted candidate-response table.
pub trait ResponseSource: Send + Sync {
    fn response_rows(&self) -> Result<Vec<ResponseRow>, SourceError>;
}

/// Failure while materializing an external table.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse export: {0}")]
    Csv(#[from] csv::Error),
}

/// Coerces a loosely-typed score cell to a number. Purely numeric text counts
/// as a score; everything else ("NA", blanks, prose) is missing data, not an
/// error.
pub fn score_from_text(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|score| score.is_finite())
}
