//! Global dayboard configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DayboardError, DayboardResult};
use crate::store::JsonFileStore;
use crate::view::ViewOptions;

/// Configuration at ~/.config/dayboard/config.toml.
///
/// Everything is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Where the collection files live; defaults to the platform data
    /// directory. Tildes are expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Narrow layout: single-day week view and tighter month cells.
    #[serde(default)]
    pub narrow: bool,

    /// Events shown per month cell before "+K more".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_cap: Option<usize>,
}

impl BoardConfig {
    pub fn config_path() -> DayboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayboardError::Config("Could not determine config directory".into()))?
            .join("dayboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path; a missing file yields defaults.
    pub fn load() -> DayboardResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DayboardResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DayboardError::Config(e.to_string()))
    }

    /// Save the current config to the default path.
    pub fn save(&self) -> DayboardResult<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DayboardError::Config(format!("Could not create config directory: {e}")))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| DayboardError::Config(e.to_string()))?;
        std::fs::write(&path, content)
            .map_err(|e| DayboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The resolved data directory, with ~ expanded.
    pub fn resolve_data_dir(&self) -> DayboardResult<PathBuf> {
        match &self.data_dir {
            Some(raw) => Ok(PathBuf::from(shellexpand::tilde(raw).into_owned())),
            None => JsonFileStore::default_dir(),
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            narrow: self.narrow,
            month_cap: self.month_cap,
        }
    }
}
