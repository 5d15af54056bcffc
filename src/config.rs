//! YAML configuration for the `fretboard` binary.
//!
//! ```yaml
//! catalog-dir: ./shapes
//! default-root: A
//! default-scale: Pentatônica Menor
//! log-filter: debug
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{DirectoryStore, MemoryStore, ShapeLibrary, ShapeStore};
use crate::chromatic::Note;
use crate::error::FretboardError;
use crate::theory::tables::SCALE_PATTERNS;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fretboard.yaml";

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    catalog_dir: Option<PathBuf>,
    default_root: Option<String>,
    default_scale: Option<String>,
    log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory of shape documents. `None` uses the built-in catalog only.
    pub catalog_dir: Option<PathBuf>,
    pub default_root: String,
    pub default_scale: String,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            default_root: "C".to_string(),
            default_scale: SCALE_PATTERNS[0].name.to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, FretboardError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| FretboardError::Config(e.to_string()))?;

        let defaults = Self::default();

        let default_root = match raw.default_root {
            Some(root) => {
                Note::from_symbol(&root)
                    .ok_or_else(|| FretboardError::Config(format!("Invalid default root: {}", root)))?;
                root
            }
            None => defaults.default_root,
        };

        let default_scale = match raw.default_scale {
            Some(scale) => {
                if !SCALE_PATTERNS.iter().any(|p| p.name == scale) {
                    return Err(FretboardError::Config(format!("Unknown default scale: {}", scale)));
                }
                scale
            }
            None => defaults.default_scale,
        };

        Ok(Self {
            catalog_dir: raw.catalog_dir,
            default_root,
            default_scale,
            log_filter: raw.log_filter,
        })
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, FretboardError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Shape library over the configured catalog directory, or over an empty
    /// in-memory store when none is configured.
    pub fn shape_library(&self) -> ShapeLibrary<Box<dyn ShapeStore>> {
        let store: Box<dyn ShapeStore> = match &self.catalog_dir {
            Some(dir) => Box::new(DirectoryStore::new(dir.clone())),
            None => Box::new(MemoryStore::new()),
        };
        ShapeLibrary::new(store)
    }
}
