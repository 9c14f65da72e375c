//! In-memory, immutable institution collection and its filters.
//!
//! Every filter is a stable linear scan: results keep the file's load order.
//! Stored records are never modified; `include_image = false` yields copies
//! with the image removed.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use hei_core::error::{Error, Result};
use hei_core::{Category, Institution, State};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionStore {
    records: Vec<Institution>,
}

impl InstitutionStore {
    pub fn from_records(records: Vec<Institution>) -> Self {
        Self { records }
    }

    /// Load a dataset file. Absent or malformed files are `DataUnavailable`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&text)
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), records = store.len(), "loaded institutions dataset");
        Ok(store)
    }

    /// Parse dataset text compiled into the binary. Malformed text is
    /// `DataUnavailable`, like a malformed file.
    pub fn from_embedded(text: &str) -> Result<Self> {
        let store = Self::from_json_str(text)
            .map_err(|e| Error::DataUnavailable(format!("embedded dataset: {}", e)))?;
        tracing::debug!(records = store.len(), "parsed embedded institutions dataset");
        Ok(store)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let records: Vec<Institution> = serde_json::from_str(text).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Borrowed view of the stored records, images included.
    pub fn records(&self) -> &[Institution] { &self.records }

    /// First record whose acronym equals `acronym` exactly (case-sensitive).
    pub fn find_by_acronym(&self, acronym: &str, include_image: bool) -> Option<Institution> {
        self.records
            .iter()
            .find(|r| r.acronym == acronym)
            .map(|r| r.project(include_image))
    }

    /// Records whose name contains `text`, ignoring case.
    pub fn find_by_name_substring(&self, text: &str, include_image: bool) -> Vec<Institution> {
        let needle = text.to_lowercase();
        self.filter(|r| r.name.to_lowercase().contains(&needle), include_image)
    }

    pub fn find_all(&self, include_image: bool) -> Vec<Institution> {
        self.filter(|_| true, include_image)
    }

    /// Records whose *name* contains the state name, ignoring case.
    ///
    /// Records carry no state attribute, so this is a name search: "Lagos"
    /// finds "University of Lagos" but not an institution in Lagos whose name
    /// omits the state, and `State::FctAbuja` only matches names containing
    /// "FCT - Abuja".
    pub fn find_by_state(&self, state: State, include_image: bool) -> Vec<Institution> {
        self.find_by_name_substring(state.as_str(), include_image)
    }

    /// Validate `category` against the closed set, then filter on it.
    /// An unknown category fails with `InvalidArgument` before any scan.
    pub fn find_by_category(&self, category: &str, include_image: bool) -> Result<Vec<Institution>> {
        let category = Category::from_str(category)?;
        Ok(self.filter_by_category(category, include_image))
    }

    pub fn filter_by_category(&self, category: Category, include_image: bool) -> Vec<Institution> {
        self.filter(|r| r.category == category, include_image)
    }

    fn filter<F>(&self, pred: F, include_image: bool) -> Vec<Institution>
    where
        F: Fn(&Institution) -> bool,
    {
        self.records
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.project(include_image))
            .collect()
    }
}
