#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! hei-query
//!
//! Read-only lookups over the Nigerian higher institutions dataset. Use an
//! [`InstitutionStore`] directly, or the free functions in [`global`] which
//! share one lazily parsed store per process, built from the dataset
//! embedded in this crate.

pub mod global;
pub mod store;

pub use global::{
    find_all, find_by_acronym, find_by_category, find_by_name_substring, find_by_state, store,
    BUNDLED_DATASET,
};
pub use hei_core::{Category, Error, Institution, Result, State};
pub use store::InstitutionStore;
