//! Candidate alignment reconciliation and ranking.
//!
//! Joins score submissions with response metadata on the response identifier,
//! collapses resubmissions per candidate by recency, aggregates partial
//! category scores into a composite, and produces ranked, filterable reports
//! scoped to one organization.

pub mod domain;
pub mod filter;
pub mod import;
pub mod index;
pub mod rank;
pub mod reconcile;
pub mod router;
pub mod scoring;
pub mod service;
pub mod source;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateRecord, Category, CategoryHighlights, CategoryScores, OrganizationScope,
    DEFAULT_ORGANIZATION, INSUFFICIENT_INFORMATION,
};
pub use filter::{FilterCatalog, FilterError, ALL_CANDIDATES};
pub use import::CsvExportSource;
pub use index::{ResponseDetails, ResponseIndex};
pub use rank::rank;
pub use reconcile::reconcile;
pub use router::alignment_router;
pub use scoring::{composite, tier_of, CompositeScore, Tier};
pub use service::{
    AlignmentReport, AlignmentReportService, CandidateView, CategoryView, ReportError,
};
pub use source::{RawScoreRow, ResponseRow, ResponseSource, ScoreSource, SourceError};
