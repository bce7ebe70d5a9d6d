//! Configuration for the campus tool
//!
//! Stored as TOML, by default in `<config dir>/campus-nav/config.toml`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampusError, Result};

pub use types::{CampusConfig, EventsConfig, GraphConfig, TasksConfig, DEFAULT_HISTORY_LIMIT};

const CONFIG_DIR: &str = "campus-nav";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUS_NAV_CONFIG_DIR";

impl CampusConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CampusConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CampusError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location, honoring `CAMPUS_NAV_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CampusError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the default config file, or defaults when it does not exist.
    ///
    /// Returns the path the config came from, if any.
    pub fn discover() -> Result<(Self, Option<PathBuf>)> {
        let path = match Self::default_path() {
            Ok(path) if path.exists() => path,
            Ok(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok((Self::default(), None));
            }
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok((Self::default(), None));
            }
        };
        let config = Self::load(&path)?;
        Ok((config, Some(path)))
    }

    /// Resolve a relative dataset path against the directory of the config file
    pub fn dataset_path(&self, config_path: Option<&Path>) -> Option<PathBuf> {
        let dataset = self.dataset.as_ref()?;
        if dataset.is_absolute() {
            return Some(dataset.clone());
        }
        let base = config_path.and_then(Path::parent);
        Some(match base {
            Some(dir) => dir.join(dataset),
            None => dataset.clone(),
        })
    }
}
