use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::OrganizationScope;
use super::filter::ALL_CANDIDATES;
use super::service::{AlignmentReportService, ReportError};
use super::source::{ResponseSource, ScoreSource};

/// Router builder exposing the ranked report endpoint.
pub fn alignment_router<S, R>(
    service: Arc<AlignmentReportService<S, R>>,
    default_scope: OrganizationScope,
) -> Router
where
    S: ScoreSource + 'static,
    R: ResponseSource + 'static,
{
    Router::new()
        .route("/api/v1/alignment/report", get(report_handler::<S, R>))
        .with_state(ReportState {
            service,
            default_scope,
        })
}

pub(crate) struct ReportState<S, R> {
    service: Arc<AlignmentReportService<S, R>>,
    default_scope: OrganizationScope,
}

impl<S, R> Clone for ReportState<S, R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            default_scope: self.default_scope.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportQuery {
    #[serde(default)]
    organization: Option<String>,
    #[serde(default)]
    filter: Option<String>,
}

pub(crate) async fn report_handler<S, R>(
    State(state): State<ReportState<S, R>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    S: ScoreSource + 'static,
    R: ResponseSource + 'static,
{
    let scope = query
        .organization
        .map(OrganizationScope::new)
        .unwrap_or_else(|| state.default_scope.clone());
    let selection = query.filter.unwrap_or_else(|| ALL_CANDIDATES.to_string());

    match state.service.ranked_report(&scope, &selection) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(ReportError::Filter(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
