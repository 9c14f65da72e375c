#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! hei-builder
//!
//! Offline conversion of the institution CSV into the JSON dataset shipped
//! with `hei-query`, optionally embedding each institution's image as base64.

pub mod builder;
pub mod images;
pub mod source;

pub use builder::{DatasetBuilder, PendingRecord};
pub use images::{load_image, load_image_from, resolve_image_path, IMAGE_EXTENSION};
pub use source::{normalize, read_rows, RawRow};
