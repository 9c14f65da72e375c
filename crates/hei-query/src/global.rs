//! Process-wide store, parsed on first use from the dataset compiled into this
//! crate.
//!
//! The parse happens exactly once, even with concurrent first callers. A failed
//! parse is remembered: every caller sees the same `DataUnavailable` error.

use std::sync::OnceLock;

use hei_core::error::{Error, Result};
use hei_core::{Category, Institution, State};

use crate::store::InstitutionStore;

/// JSON text of the bundled dataset, embedded at compile time.
pub const BUNDLED_DATASET: &str = include_str!("../data/nigerian_higher_institutions.json");

static STORE: OnceLock<std::result::Result<InstitutionStore, String>> = OnceLock::new();

/// The shared store, loading it on the first call.
pub fn store() -> Result<&'static InstitutionStore> {
    STORE
        .get_or_init(|| {
            InstitutionStore::from_embedded(BUNDLED_DATASET).map_err(|e| {
                tracing::error!(error = %e, "failed to load institutions dataset");
                match e {
                    Error::DataUnavailable(msg) => msg,
                    other => other.to_string(),
                }
            })
        })
        .as_ref()
        .map_err(|msg| Error::DataUnavailable(msg.clone()))
}

pub fn find_by_acronym(acronym: &str, include_image: bool) -> Result<Option<Institution>> {
    Ok(store()?.find_by_acronym(acronym, include_image))
}

pub fn find_by_name_substring(text: &str, include_image: bool) -> Result<Vec<Institution>> {
    Ok(store()?.find_by_name_substring(text, include_image))
}

pub fn find_all(include_image: bool) -> Result<Vec<Institution>> {
    Ok(store()?.find_all(include_image))
}

/// See [`InstitutionStore::find_by_state`]: this matches on the name.
pub fn find_by_state(state: State, include_image: bool) -> Result<Vec<Institution>> {
    Ok(store()?.find_by_state(state, include_image))
}

/// Fails with `InvalidArgument` for an unknown category without touching the
/// dataset.
pub fn find_by_category(category: &str, include_image: bool) -> Result<Vec<Institution>> {
    let category: Category = category.parse()?;
    Ok(store()?.filter_by_category(category, include_image))
}
