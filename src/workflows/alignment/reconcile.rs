use std::collections::HashMap;

use tracing::debug;

use super::domain::{CandidateRecord, CategoryHighlights, OrganizationScope};
use super::index::{ResponseDetails, ResponseIndex};
use super::source::RawScoreRow;

/// Joins score rows with response metadata and collapses resubmissions so at
/// most one record per candidate name survives.
///
/// Rows whose `response_id` is absent or does not resolve in the index cannot
/// be attributed to the active organization and are excluded silently. Within
/// a name group the row with the strictly greatest `created_at` wins; ties
/// and absent timestamps keep the earliest-encountered row.
pub fn reconcile(
    score_rows: Vec<RawScoreRow>,
    index: &ResponseIndex,
    scope: &OrganizationScope,
) -> Vec<CandidateRecord> {
    let mut kept: Vec<RawScoreRow> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();
    let mut unresolved = 0usize;

    for row in score_rows {
        let resolves = row
            .response_id
            .as_deref()
            .is_some_and(|id| index.resolve(id).is_some());
        if !resolves {
            unresolved += 1;
            continue;
        }

        match slot_by_name.get(&row.name) {
            Some(&slot) => {
                // `None < Some(_)`, so absent timestamps never displace a row.
                if row.created_at > kept[slot].created_at {
                    kept[slot] = row;
                }
            }
            None => {
                slot_by_name.insert(row.name.clone(), kept.len());
                kept.push(row);
            }
        }
    }

    if unresolved > 0 {
        debug!(
            unresolved,
            organization = scope.as_str(),
            "excluded score rows without a matching response"
        );
    }

    kept.into_iter()
        .map(|row| candidate_from_row(row, index, scope))
        .collect()
}

fn candidate_from_row(
    row: RawScoreRow,
    index: &ResponseIndex,
    scope: &OrganizationScope,
) -> CandidateRecord {
    // Rows only reach this point after resolving in the index.
    let details: Option<&ResponseDetails> =
        row.response_id.as_deref().and_then(|id| index.resolve(id));

    let (sub_organization, role, email) = match details {
        Some(details) => (
            details.sub_organization.clone().unwrap_or_default(),
            details.role.clone().unwrap_or_default(),
            details.email.clone(),
        ),
        None => (String::new(), String::new(), None),
    };

    CandidateRecord {
        name: row.name,
        email,
        organization: scope.as_str().to_string(),
        sub_organization,
        role,
        scores: row.scores,
        highlights: CategoryHighlights::from_parts(
            row.purpose_highlight,
            row.people_highlight,
            row.priorities_highlight,
        ),
    }
}
