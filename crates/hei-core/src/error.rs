use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    /// A single image asset is absent. Builders recover from this per record.
    #[error("Image asset missing: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
