use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::alignment::domain::{CategoryScores, OrganizationScope};
use crate::workflows::alignment::source::{RawScoreRow, ResponseRow};

pub(super) fn scope() -> OrganizationScope {
    OrganizationScope::new("Liberty Dental")
}

pub(super) fn timestamp(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn scores(
    purpose: Option<f64>,
    people: Option<f64>,
    priorities: Option<f64>,
) -> CategoryScores {
    CategoryScores {
        purpose,
        people,
        priorities,
    }
}

pub(super) fn response_row(
    id: &str,
    sub_organization: Option<&str>,
    role: Option<&str>,
    email: Option<&str>,
) -> ResponseRow {
    ResponseRow {
        id: id.to_string(),
        organization: "Liberty Dental".to_string(),
        sub_organization: sub_organization.map(str::to_string),
        role: role.map(str::to_string),
        email: email.map(str::to_string),
    }
}

pub(super) fn score_row(
    name: &str,
    response_id: Option<&str>,
    created_at: Option<DateTime<Utc>>,
    scores: CategoryScores,
) -> RawScoreRow {
    RawScoreRow {
        name: name.to_string(),
        response_id: response_id.map(str::to_string),
        created_at,
        scores,
        purpose_highlight: None,
        people_highlight: None,
        priorities_highlight: None,
    }
}

pub(super) fn standard_responses() -> Vec<ResponseRow> {
    vec![
        response_row(
            "resp-1",
            Some("Front Desk"),
            Some("Coordinator"),
            Some("a.lee@example.com"),
        ),
        response_row(
            "resp-2",
            Some("Clinical"),
            Some("Assistant"),
            Some("b.ortiz@example.com"),
        ),
        response_row("resp-3", Some("Front Desk"), Some("Coordinator"), None),
    ]
}
