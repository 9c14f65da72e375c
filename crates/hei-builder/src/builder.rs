use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use hei_core::config::BuildSettings;
use hei_core::error::{Error, Result};
use hei_core::Institution;

use crate::images::{load_image_from, resolve_image_path};
use crate::source::{normalize, read_rows};

/// A normalized row before its image is loaded.
///
/// `image_path` is the resolved asset location; it is `None` when the builder
/// does not embed images, and it never reaches the serialized dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub institution: Institution,
    pub image_path: Option<PathBuf>,
}

impl PendingRecord {
    /// Load the image, if any, and return the finished record.
    pub fn into_institution(self) -> Result<Institution> {
        let mut institution = self.institution;
        if let Some(path) = &self.image_path {
            institution.image = load_image_from(path, &institution.acronym)?;
        }
        Ok(institution)
    }
}

/// Converts the source CSV into the published JSON dataset.
///
/// Images are only embedded when an image root is set.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    image_root: Option<PathBuf>,
    show_progress: bool,
}

impl DatasetBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn from_settings(settings: &BuildSettings) -> Self {
        let builder = Self::new();
        if settings.embed_images { builder.with_images(&settings.image_root) } else { builder }
    }

    pub fn with_images(mut self, image_root: &Path) -> Self {
        self.image_root = Some(image_root.to_path_buf());
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn image_root(&self) -> Option<&Path> {
        self.image_root.as_deref()
    }

    /// Read and normalize every row, resolving image paths when configured.
    pub fn prepare(&self, source_path: &Path) -> Result<Vec<PendingRecord>> {
        read_rows(source_path)?
            .iter()
            .map(|row| {
                let institution = normalize(row)?;
                let image_path = self.image_root.as_deref().map(|root| resolve_image_path(&institution, root));
                Ok(PendingRecord { institution, image_path })
            })
            .collect()
    }

    /// Prepare every row and load its image.
    pub fn build(&self, source_path: &Path) -> Result<Vec<Institution>> {
        let pending = self.prepare(source_path)?;
        let pb = self.progress_bar(pending.len());
        let mut records = Vec::with_capacity(pending.len());
        for row in pending {
            let record = row.into_institution()?;
            pb.set_message(record.acronym.clone());
            pb.inc(1);
            records.push(record);
        }
        pb.finish_and_clear();
        if self.image_root.is_some() {
            let missing_images = records.iter().filter(|r| !r.has_image()).count();
            tracing::info!(records = records.len(), missing_images, "normalized institutions with images");
        } else {
            tracing::info!(records = records.len(), "normalized institutions");
        }
        Ok(records)
    }

    /// Build once and write the same bytes to every destination.
    /// Returns the number of records written.
    ///
    /// Every destination is first staged as a temporary file next to it; the
    /// targets are only replaced once all staging succeeded.
    pub fn build_and_write(&self, source_path: &Path, destinations: &[PathBuf]) -> Result<usize> {
        if destinations.is_empty() {
            return Err(Error::InvalidArgument("at least one destination path is required".to_string()));
        }
        let records = self.build(source_path)?;
        let bytes = serialize(&records)?;
        let staged = destinations
            .iter()
            .map(|dest| stage_bytes(dest, &bytes))
            .collect::<Result<Vec<_>>>()?;
        for (tmp, dest) in staged.into_iter().zip(destinations) {
            tmp.persist(dest).map_err(|e| Error::Io(e.error))?;
            tracing::info!(path = %dest.display(), records = records.len(), "wrote dataset");
        }
        Ok(records.len())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress { return ProgressBar::hidden(); }
        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} institutions {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}

/// Pretty JSON array, two-space indent, non-ASCII kept literal.
pub fn serialize(records: &[Institution]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records).map_err(|e| Error::Parse(format!("serialize dataset: {}", e)))
}

/// Write `bytes` to a temporary file in `dest`'s directory, creating it if needed.
fn stage_bytes(dest: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
