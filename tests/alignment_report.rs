//! Integration specifications for the alignment reconciliation and ranking
//! workflow.
//!
//! Scenarios exercise the public service facade and HTTP router end to end:
//! duplicate submissions, unattributable score rows, filter catalogs scoped
//! to the active organization, and ranked output.

mod common {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use hirealigned::workflows::alignment::{
        AlignmentReportService, CategoryScores, OrganizationScope, RawScoreRow, ResponseRow,
        ResponseSource, ScoreSource, SourceError,
    };

    pub(super) struct MemoryScores {
        rows: Vec<RawScoreRow>,
    }

    impl ScoreSource for MemoryScores {
        fn score_rows(&self) -> Result<Vec<RawScoreRow>, SourceError> {
            Ok(self.rows.clone())
        }
    }

    pub(super) struct MemoryResponses {
        rows: Vec<ResponseRow>,
    }

    impl ResponseSource for MemoryResponses {
        fn response_rows(&self) -> Result<Vec<ResponseRow>, SourceError> {
            Ok(self.rows.clone())
        }
    }

    pub(super) fn scope() -> OrganizationScope {
        OrganizationScope::new("Liberty Dental")
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn response(
        id: &str,
        organization: &str,
        sub_organization: Option<&str>,
        role: Option<&str>,
        email: Option<&str>,
    ) -> ResponseRow {
        ResponseRow {
            id: id.to_string(),
            organization: organization.to_string(),
            sub_organization: sub_organization.map(str::to_string),
            role: role.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    fn score(
        name: &str,
        response_id: Option<&str>,
        created_at: Option<DateTime<Utc>>,
        purpose: Option<f64>,
        people: Option<f64>,
        priorities: Option<f64>,
    ) -> RawScoreRow {
        RawScoreRow {
            name: name.to_string(),
            response_id: response_id.map(str::to_string),
            created_at,
            scores: CategoryScores {
                purpose,
                people,
                priorities,
            },
            purpose_highlight: None,
            people_highlight: None,
            priorities_highlight: None,
        }
    }

    fn responses() -> Vec<ResponseRow> {
        vec![
            response(
                "resp-1",
                "Liberty Dental",
                Some("Front Desk"),
                Some("Coordinator"),
                Some("a.lee@example.com"),
            ),
            response(
                "resp-2",
                "Liberty Dental",
                Some("Clinical"),
                Some("Assistant"),
                Some("b.ortiz@example.com"),
            ),
            response(
                "resp-3",
                "Liberty Dental",
                Some("Front Desk"),
                Some("Coordinator"),
                None,
            ),
            // Out-of-scope organization; must not leak into the catalog.
            response(
                "resp-4",
                "Evergreen Clinics",
                Some("Lab"),
                Some("Technician"),
                None,
            ),
        ]
    }

    fn score_rows() -> Vec<RawScoreRow> {
        vec![
            // Resubmission: the later row carries the scores that must win.
            score(
                "A. Lee",
                Some("resp-1"),
                Some(at(1, 9)),
                Some(5.0),
                Some(5.0),
                Some(5.0),
            ),
            score(
                "A. Lee",
                Some("resp-1"),
                Some(at(2, 9)),
                Some(9.0),
                Some(8.0),
                Some(9.0),
            ),
            score(
                "B. Ortiz",
                Some("resp-2"),
                Some(at(1, 10)),
                Some(7.0),
                Some(8.0),
                Some(8.0),
            ),
            // No usable category data; must rank last as NA.
            score("C. Diaz", Some("resp-3"), Some(at(1, 11)), None, None, None),
            // Unattributable: no matching response row anywhere.
            score(
                "Ghost",
                Some("resp-gone"),
                Some(at(1, 12)),
                Some(10.0),
                Some(10.0),
                Some(10.0),
            ),
        ]
    }

    pub(super) fn build_service() -> AlignmentReportService<MemoryScores, MemoryResponses> {
        AlignmentReportService::new(
            Arc::new(MemoryScores { rows: score_rows() }),
            Arc::new(MemoryResponses { rows: responses() }),
        )
    }

    pub(super) fn build_service_arc(
    ) -> Arc<AlignmentReportService<MemoryScores, MemoryResponses>> {
        Arc::new(build_service())
    }
}

mod reconciliation {
    use super::common::*;
    use hirealigned::workflows::alignment::ALL_CANDIDATES;

    #[test]
    fn duplicate_submissions_collapse_to_the_most_recent() {
        let service = build_service();
        let report = service
            .ranked_report(&scope(), ALL_CANDIDATES)
            .expect("report builds");

        let lees: Vec<_> = report
            .candidates
            .iter()
            .filter(|candidate| candidate.name == "A. Lee")
            .collect();
        assert_eq!(lees.len(), 1);
        // (9 + 8 + 9) / 3 = 8.666... -> 8.7, from the later submission.
        assert_eq!(lees[0].composite_score, "8.7");
        assert_eq!(lees[0].tier, "high");
    }

    #[test]
    fn unattributable_rows_are_excluded_without_disturbing_the_ranking() {
        let service = build_service();
        let report = service
            .ranked_report(&scope(), ALL_CANDIDATES)
            .expect("report builds");

        assert!(report
            .candidates
            .iter()
            .all(|candidate| candidate.name != "Ghost"));

        let names: Vec<&str> = report
            .candidates
            .iter()
            .map(|candidate| candidate.name.as_str())
            .collect();
        assert_eq!(names, ["A. Lee", "B. Ortiz", "C. Diaz"]);
    }

    #[test]
    fn unscored_candidates_rank_last_with_na_composite() {
        let service = build_service();
        let report = service
            .ranked_report(&scope(), ALL_CANDIDATES)
            .expect("report builds");

        let last = report.candidates.last().expect("candidates present");
        assert_eq!(last.name, "C. Diaz");
        assert_eq!(last.composite_score, "NA");
        assert_eq!(last.tier, "none");
    }
}

mod filtering {
    use super::common::*;
    use hirealigned::workflows::alignment::{OrganizationScope, ALL_CANDIDATES};

    #[test]
    fn filter_options_reflect_only_the_active_organization() {
        let service = build_service();
        let report = service
            .ranked_report(&scope(), ALL_CANDIDATES)
            .expect("report builds");

        assert_eq!(
            report.filter_options,
            [
                ALL_CANDIDATES,
                "Clinical - Assistant",
                "Front Desk - Coordinator"
            ]
        );
    }

    #[test]
    fn concrete_selection_narrows_and_reranks_the_visible_set() {
        let service = build_service();
        let report = service
            .ranked_report(&scope(), "Front Desk - Coordinator")
            .expect("report builds");

        let names: Vec<&str> = report
            .candidates
            .iter()
            .map(|candidate| candidate.name.as_str())
            .collect();
        assert_eq!(names, ["A. Lee", "C. Diaz"]);
    }

    #[test]
    fn unknown_organization_scope_yields_an_empty_report() {
        let service = build_service();
        let report = service
            .ranked_report(&OrganizationScope::new("Nowhere Dental"), ALL_CANDIDATES)
            .expect("report builds");

        assert_eq!(report.filter_options, [ALL_CANDIDATES]);
        assert!(report.candidates.is_empty());
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use hirealigned::workflows::alignment::alignment_router;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        alignment_router(build_service_arc(), scope())
    }

    #[tokio::test]
    async fn report_endpoint_returns_ranked_candidates() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/alignment/report")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(
            payload.get("organization").and_then(Value::as_str),
            Some("Liberty Dental")
        );
        let candidates = payload
            .get("candidates")
            .and_then(Value::as_array)
            .expect("candidates array");
        assert_eq!(candidates.len(), 3);
        assert_eq!(
            candidates[0].get("name").and_then(Value::as_str),
            Some("A. Lee")
        );
        assert_eq!(
            candidates[2].get("composite_score").and_then(Value::as_str),
            Some("NA")
        );
    }

    #[tokio::test]
    async fn report_endpoint_applies_query_filters() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/alignment/report?filter=Clinical%20-%20Assistant")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        let candidates = payload
            .get("candidates")
            .and_then(Value::as_array)
            .expect("candidates array");
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].get("name").and_then(Value::as_str),
            Some("B. Ortiz")
        );
    }

    #[tokio::test]
    async fn malformed_filter_selection_is_rejected() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/alignment/report?filter=FrontDesk")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert!(payload.get("error").is_some());
    }
}
