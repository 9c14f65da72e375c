//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys are addressed with a double underscore, e.g.
//! `APP_BUILD__EMBED_IMAGES=true`. Relative paths in the files resolve against
//! the directory the config was loaded from.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
    base: PathBuf,
}

/// Raw `[build]` table as written in the config files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawBuild {
    source_csv: String,
    image_root: String,
    embed_images: bool,
    outputs: Vec<String>,
}

impl Default for RawBuild {
    fn default() -> Self {
        Self {
            source_csv: "resources/NARR/NARR institution.csv".to_string(),
            image_root: "resources/NARR".to_string(),
            embed_images: false,
            outputs: vec!["resources/Nigerian Higher Institutions.json".to_string()],
        }
    }
}

/// Builder settings with every path already expanded and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub source_csv: PathBuf,
    pub image_root: PathBuf,
    pub embed_images: bool,
    pub outputs: Vec<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir()?;
        Self::load_from(&cwd)
    }

    /// Load configuration files found in `base`.
    pub fn load_from(base: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base: base.to_path_buf() };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn build_settings(&self) -> Result<BuildSettings> {
        let raw = self.raw_build()?;
        Ok(BuildSettings {
            source_csv: resolve_with_base(&self.base, &raw.source_csv),
            image_root: resolve_with_base(&self.base, &raw.image_root),
            embed_images: raw.embed_images,
            outputs: raw.outputs.iter().map(|p| resolve_with_base(&self.base, p)).collect(),
        })
    }

    /// Dataset file override for the query commands, if one is configured.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.get::<String>("query.dataset_path")
            .ok()
            .map(|p| resolve_with_base(&self.base, p))
    }

    fn raw_build(&self) -> Result<RawBuild> {
        if !self.figment.contains("build") {
            return Ok(RawBuild::default());
        }
        self.get("build")
    }

    fn validate(&self) -> Result<()> {
        let raw = self.raw_build()?;
        if raw.outputs.is_empty() {
            return Err(Error::InvalidConfig("build.outputs must name at least one destination".to_string()));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
