//! Image asset lookup and base64 embedding.
//!
//! Assets live under a fixed taxonomy:
//! `<root>/<PluralCategory>/<Ownership>_<PluralCategory>/<Acronym>.jpg`,
//! with spaces in the ownership replaced by underscores.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hei_core::error::{Error, Result};
use hei_core::Institution;

pub const IMAGE_EXTENSION: &str = "jpg";

pub fn resolve_image_path(record: &Institution, root: &Path) -> PathBuf {
    let plural = record.category.plural();
    let ownership_dir = format!("{}_{}", record.ownership.replace(' ', "_"), plural);
    let file_name = format!("{}.{}", record.acronym, IMAGE_EXTENSION);
    root.join(plural).join(ownership_dir).join(file_name)
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::AssetMissing(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Base64 of the record's image, or `None` when the asset is missing.
///
/// A missing asset is logged and skipped; any other I/O failure is returned.
pub fn load_image(record: &Institution, root: &Path) -> Result<Option<String>> {
    load_image_from(&resolve_image_path(record, root), &record.acronym)
}

/// Same as [`load_image`] for an already resolved asset path.
pub fn load_image_from(path: &Path, acronym: &str) -> Result<Option<String>> {
    match read_asset(path) {
        Ok(bytes) => {
            tracing::debug!(acronym, bytes = bytes.len(), "embedded image");
            Ok(Some(STANDARD.encode(bytes)))
        }
        Err(Error::AssetMissing(missing)) => {
            tracing::warn!(acronym, path = %missing.display(), "image asset not found");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
