use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::CategoryScores;
use super::source::{
    score_from_text, RawScoreRow, ResponseRow, ResponseSource, ScoreSource, SourceError,
};

/// Parses a CSV export of the score table, coercing numeric-looking text to
/// numbers and everything else to missing values.
pub fn parse_score_rows<R: Read>(reader: R) -> Result<Vec<RawScoreRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<ScoreExportRow>() {
        rows.push(record?.into_raw());
    }

    Ok(rows)
}

/// Parses a CSV export of the candidate-response table.
pub fn parse_response_rows<R: Read>(reader: R) -> Result<Vec<ResponseRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<ResponseExportRow>() {
        let row = record?;
        rows.push(ResponseRow {
            id: row.id,
            organization: row.organization,
            sub_organization: row.sub_organization,
            role: row.role,
            email: row.email,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct ScoreExportRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Response ID", default, deserialize_with = "empty_string_as_none")]
    response_id: Option<String>,
    #[serde(rename = "Created At", default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
    #[serde(rename = "Purpose Score", default, deserialize_with = "empty_string_as_none")]
    purpose_score: Option<String>,
    #[serde(rename = "People Score", default, deserialize_with = "empty_string_as_none")]
    people_score: Option<String>,
    #[serde(rename = "Priorities Score", default, deserialize_with = "empty_string_as_none")]
    priorities_score: Option<String>,
    #[serde(rename = "Purpose Highlight", default, deserialize_with = "empty_string_as_none")]
    purpose_highlight: Option<String>,
    #[serde(rename = "People Highlight", default, deserialize_with = "empty_string_as_none")]
    people_highlight: Option<String>,
    #[serde(
        rename = "Priorities Highlight",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    priorities_highlight: Option<String>,
}

impl ScoreExportRow {
    fn into_raw(self) -> RawScoreRow {
        let scores = CategoryScores {
            purpose: self.purpose_score.as_deref().and_then(score_from_text),
            people: self.people_score.as_deref().and_then(score_from_text),
            priorities: self.priorities_score.as_deref().and_then(score_from_text),
        };

        RawScoreRow {
            name: self.name,
            response_id: self.response_id,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            scores,
            purpose_highlight: self.purpose_highlight,
            people_highlight: self.people_highlight,
            priorities_highlight: self.priorities_highlight,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResponseExportRow {
    #[serde(rename = "Response ID", default)]
    id: String,
    #[serde(rename = "Organization", default)]
    organization: String,
    #[serde(rename = "Sub Organization", default, deserialize_with = "empty_string_as_none")]
    sub_organization: Option<String>,
    #[serde(rename = "Role", default, deserialize_with = "empty_string_as_none")]
    role: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

/// Reads both table exports from disk, fresh on every call, so each rendered
/// view reconciles the latest data.
#[derive(Debug, Clone)]
pub struct CsvExportSource {
    scores_path: PathBuf,
    responses_path: PathBuf,
}

impl CsvExportSource {
    pub fn new(scores_path: impl Into<PathBuf>, responses_path: impl Into<PathBuf>) -> Self {
        Self {
            scores_path: scores_path.into(),
            responses_path: responses_path.into(),
        }
    }
}

impl ScoreSource for CsvExportSource {
    fn score_rows(&self) -> Result<Vec<RawScoreRow>, SourceError> {
        let file = File::open(&self.scores_path)?;
        Ok(parse_score_rows(file)?)
    }
}

impl ResponseSource for CsvExportSource {
    fn response_rows(&self) -> Result<Vec<ResponseRow>, SourceError> {
        let file = File::open(&self.responses_path)?;
        Ok(parse_response_rows(file)?)
    }
}
