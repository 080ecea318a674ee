use super::domain::CandidateRecord;
use super::scoring::{composite, CompositeScore};

/// Orders candidates by composite score, highest first, with unscored
/// candidates strictly last. The sort is stable: ties among equal scores or
/// among unscored candidates preserve the input order. Re-run after every
/// filter change so the order reflects the visible set.
pub fn rank(records: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    let mut keyed: Vec<(CompositeScore, CandidateRecord)> = records
        .into_iter()
        .map(|record| (composite(&record.scores), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.ranking_cmp(a));

    keyed.into_iter().map(|(_, record)| record).collect()
}
