//! Configuration for the `atin` command-line tool.
//!
//! Read from `~/.atin/config.toml`, or from the file named by `ATIN_CONFIG`:
//!
//! ```toml
//! [rounding]
//! grid = "M5"
//! mode = "nearest"
//! ```

use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use atin_core::{Atin, Grid, GridError, RoundingMode};

pub const CONFIG_ENV_VAR: &str = "ATIN_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtinConfig {
    pub rounding: Option<RoundingConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundingConfig {
    /// Default grid as Atin text.
    pub grid: Option<Atin>,
    pub mode: Option<RoundingMode>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid rounding grid `{grid}`: {source}")]
    InvalidGrid { grid: Atin, source: GridError },
}

impl RoundingConfig {
    /// The configured grid, validated. `Ok(None)` when unset.
    pub fn grid(&self) -> Result<Option<Grid>, ConfigError> {
        self.grid
            .map(|grid| {
                Grid::new(grid.span()).map_err(|source| ConfigError::InvalidGrid { grid, source })
            })
            .transpose()
    }
}

impl AtinConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn rounding_mode(&self) -> Option<RoundingMode> {
        self.rounding.as_ref().and_then(|r| r.mode)
    }

    pub fn rounding_grid(&self) -> Result<Option<Grid>, ConfigError> {
        match &self.rounding {
            Some(rounding) => rounding.grid(),
            None => Ok(None),
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

fn resolve_config_path(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => home.map(|home| home.join(".atin").join("config.toml")),
    }
}
