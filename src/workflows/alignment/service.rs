use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{CandidateRecord, OrganizationScope};
use super::filter::{FilterCatalog, FilterError};
use super::index::ResponseIndex;
use super::rank::rank;
use super::reconcile::reconcile;
use super::scoring::{composite, tier_of};
use super::source::{ResponseSource, ScoreSource, SourceError};

/// Service composing the response index, reconciliation, filtering, and
/// ranking into one report pass. Each call consumes freshly materialized
/// inputs and shares no state with previous runs.
pub struct AlignmentReportService<S, R> {
    scores: Arc<S>,
    responses: Arc<R>,
}

impl<S, R> AlignmentReportService<S, R>
where
    S: ScoreSource + 'static,
    R: ResponseSource + 'static,
{
    pub fn new(scores: Arc<S>, responses: Arc<R>) -> Self {
        Self { scores, responses }
    }

    /// Runs one reconciliation pass and returns the ranked, filtered report
    /// for the presentation collaborator.
    pub fn ranked_report(
        &self,
        scope: &OrganizationScope,
        selection: &str,
    ) -> Result<AlignmentReport, ReportError> {
        let response_rows = self.responses.response_rows()?;
        let index = ResponseIndex::build(&response_rows, scope);
        let catalog = FilterCatalog::from_index(&index);

        let score_rows = self.scores.score_rows()?;
        let records = reconcile(score_rows, &index, scope);
        let visible = catalog.apply(records, selection)?;
        let ranked = rank(visible);

        info!(
            organization = scope.as_str(),
            selection,
            candidates = ranked.len(),
            "alignment report reconciled"
        );

        Ok(AlignmentReport {
            organization: scope.as_str().to_string(),
            selection: selection.to_string(),
            filter_options: catalog.options().to_vec(),
            candidates: ranked.iter().map(CandidateView::from_record).collect(),
        })
    }
}

/// Error raised while assembling a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Ranked candidate report handed to the presentation collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub organization: String,
    pub selection: String,
    pub filter_options: Vec<String>,
    pub candidates: Vec<CandidateView>,
}

/// Presentation snapshot of one reconciled candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub sub_organization: String,
    pub role: String,
    pub composite_score: String,
    pub tier: &'static str,
    pub categories: Vec<CategoryView>,
}

impl CandidateView {
    pub fn from_record(record: &CandidateRecord) -> Self {
        let composite = composite(&record.scores);

        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            sub_organization: record.sub_organization.clone(),
            role: record.role.clone(),
            composite_score: composite.to_string(),
            tier: composite.tier().label(),
            categories: record
                .scores
                .iter()
                .map(|(category, score)| CategoryView {
                    category: category.label(),
                    score,
                    tier: tier_of(score).label(),
                    highlight: record.highlights.get(category).to_string(),
                })
                .collect(),
        }
    }
}

/// One category cell of a candidate view.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub tier: &'static str,
    pub highlight: String,
}
