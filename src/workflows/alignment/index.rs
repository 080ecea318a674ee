use std::collections::{BTreeSet, HashMap};

use super::domain::OrganizationScope;
use super::source::ResponseRow;

/// Metadata attached to one response within the active organization scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDetails {
    pub sub_organization: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

/// Lookup from response identifier to organizational metadata, restricted to
/// rows matching one organization. Rows missing a sub-organization or role
/// still resolve; they just contribute no filter combination.
#[derive(Debug, Clone, Default)]
pub struct ResponseIndex {
    entries: HashMap<String, ResponseDetails>,
    combinations: Vec<String>,
}

impl ResponseIndex {
    pub fn build(rows: &[ResponseRow], scope: &OrganizationScope) -> Self {
        let mut entries = HashMap::new();
        let mut combinations = BTreeSet::new();

        for row in rows {
            if row.id.is_empty() || row.organization != scope.as_str() {
                continue;
            }

            if let (Some(sub_organization), Some(role)) = (&row.sub_organization, &row.role) {
                combinations.insert(format!("{sub_organization} - {role}"));
            }

            entries.insert(
                row.id.clone(),
                ResponseDetails {
                    sub_organization: row.sub_organization.clone(),
                    role: row.role.clone(),
                    email: row.email.clone(),
                },
            );
        }

        Self {
            entries,
            combinations: combinations.into_iter().collect(),
        }
    }

    pub fn resolve(&self, response_id: &str) -> Option<&ResponseDetails> {
        self.entries.get(response_id)
    }

    /// Distinct `"{sub_organization} - {role}"` strings observed in scope,
    /// sorted.
    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
