use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::CategoryScores;

/// Composite alignment score for one candidate. `Unscored` is a distinct
/// no-data state, never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompositeScore {
    Scored(f64),
    Unscored,
}

impl CompositeScore {
    /// Ranking order: higher scores first; `Unscored` sorts strictly below
    /// every numeric score, including zero.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CompositeScore::Scored(a), CompositeScore::Scored(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CompositeScore::Scored(_), CompositeScore::Unscored) => Ordering::Greater,
            (CompositeScore::Unscored, CompositeScore::Scored(_)) => Ordering::Less,
            (CompositeScore::Unscored, CompositeScore::Unscored) => Ordering::Equal,
        }
    }

    /// Presentation tier for this composite. A hint for the presenter only;
    /// ranking never consults it.
    pub fn tier(self) -> Tier {
        match self {
            CompositeScore::Unscored => Tier::None,
            CompositeScore::Scored(score) if score >= 8.0 => Tier::High,
            CompositeScore::Scored(score) if score >= 6.0 => Tier::Medium,
            CompositeScore::Scored(_) => Tier::Low,
        }
    }
}

impl fmt::Display for CompositeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeScore::Scored(score) => write!(f, "{score:.1}"),
            CompositeScore::Unscored => write!(f, "NA"),
        }
    }
}

/// Mean of the present category scores, rounded to one decimal place.
/// `Unscored` when no category carries a value.
pub fn composite(scores: &CategoryScores) -> CompositeScore {
    let present: Vec<f64> = scores.iter().filter_map(|(_, value)| value).collect();
    if present.is_empty() {
        return CompositeScore::Unscored;
    }

    let mean = present.iter().sum::<f64>() / present.len() as f64;
    CompositeScore::Scored((mean * 10.0).round() / 10.0)
}

/// Tier for a single optional score, used for per-category presentation.
pub fn tier_of(score: Option<f64>) -> Tier {
    match score {
        Some(value) => CompositeScore::Scored(value).tier(),
        None => Tier::None,
    }
}

/// Discrete presentation bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    None,
    Low,
    Medium,
    High,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}
