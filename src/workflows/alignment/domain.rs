use serde::{Deserialize, Serialize};

/// Organization scope applied when the caller does not select one.
pub const DEFAULT_ORGANIZATION: &str = "Liberty Dental";

/// Narrative shown when a candidate supplied nothing usable for a category.
pub const INSUFFICIENT_INFORMATION: &str = "Insufficient information provided";

/// Fixed assessment categories shared by every candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Purpose,
    People,
    Priorities,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Purpose, Category::People, Category::Priorities];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Purpose => "purpose",
            Category::People => "people",
            Category::Priorities => "priorities",
        }
    }
}

/// Per-category numeric scores. The three slots always exist, even when the
/// underlying value never arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub purpose: Option<f64>,
    pub people: Option<f64>,
    pub priorities: Option<f64>,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Purpose => self.purpose,
            Category::People => self.people,
            Category::Priorities => self.priorities,
        }
    }

    /// Visits the categories in their fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<f64>)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }
}

/// Per-category narrative highlights. Empty slots fall back to the standard
/// insufficient-information message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHighlights {
    pub purpose: String,
    pub people: String,
    pub priorities: String,
}

impl CategoryHighlights {
    pub fn from_parts(
        purpose: Option<String>,
        people: Option<String>,
        priorities: Option<String>,
    ) -> Self {
        let fallback = || INSUFFICIENT_INFORMATION.to_string();
        Self {
            purpose: purpose.unwrap_or_else(fallback),
            people: people.unwrap_or_else(fallback),
            priorities: priorities.unwrap_or_else(fallback),
        }
    }

    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Purpose => &self.purpose,
            Category::People => &self.people,
            Category::Priorities => &self.priorities,
        }
    }
}

impl Default for CategoryHighlights {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

/// Canonical in-memory representation of one candidate's evaluation after
/// reconciliation. `sub_organization` and `role` are empty strings when the
/// response metadata lacked the field; `email` stays `None` when no response
/// carried one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: Option<String>,
    pub organization: String,
    pub sub_organization: String,
    pub role: String,
    pub scores: CategoryScores,
    pub highlights: CategoryHighlights,
}

/// Currently selected top-level organization gating which response and score
/// rows participate in a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationScope(String);

impl OrganizationScope {
    pub fn new(organization: impl Into<String>) -> Self {
        Self(organization.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrganizationScope {
    fn default() -> Self {
        Self(DEFAULT_ORGANIZATION.to_string())
    }
}
