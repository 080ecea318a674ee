use super::domain::CandidateRecord;
use super::index::ResponseIndex;

/// Implicit catalog option matching every record.
pub const ALL_CANDIDATES: &str = "All";

const COMBINATION_SEPARATOR: &str = " - ";

/// Valid filter selections for the active organization scope: `"All"`
/// followed by the scope's distinct `"{sub_organization} - {role}"` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCatalog {
    options: Vec<String>,
}

impl FilterCatalog {
    pub fn from_index(index: &ResponseIndex) -> Self {
        let mut options = Vec::with_capacity(index.combinations().len() + 1);
        options.push(ALL_CANDIDATES.to_string());
        options.extend(index.combinations().iter().cloned());
        Self { options }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Narrows records to the selected combination. `"All"` passes everything
    /// through untouched. Callers must supply a selection previously returned
    /// by [`FilterCatalog::options`]; a string without the separator is a
    /// contract violation, not dirty data.
    pub fn apply(
        &self,
        records: Vec<CandidateRecord>,
        selection: &str,
    ) -> Result<Vec<CandidateRecord>, FilterError> {
        if selection == ALL_CANDIDATES {
            return Ok(records);
        }

        let (sub_organization, role) = selection
            .split_once(COMBINATION_SEPARATOR)
            .ok_or_else(|| FilterError::MalformedSelection {
                selection: selection.to_string(),
            })?;

        Ok(records
            .into_iter()
            .filter(|record| record.sub_organization == sub_organization && record.role == role)
            .collect())
    }
}

/// Caller-contract violation raised for selections the catalog never issued.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("filter selection '{selection}' is not of the form '<sub-organization> - <role>'")]
    MalformedSelection { selection: String },
}
