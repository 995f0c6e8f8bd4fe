//! `solarframe.toml` loading and alternate reference datasets.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solar_core::{CalcError, MountInput, ReferenceData};
use thiserror::Error;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "solarframe.toml";

/// Errors raised while loading configuration or reference data
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("reference data in {path} rejected: {source}")]
    Reference {
        path: PathBuf,
        #[source]
        source: CalcError,
    },
}

/// Contents of `solarframe.toml`. Every key is optional.
///
/// ```toml
/// log_level = "debug"
/// reference_data = "data/site_survey.toml"
///
/// [defaults]
/// location = "Harbin"
/// tilt_angle_deg = 35.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when neither `--log-level` nor `RUST_LOG` is set
    pub log_level: Option<String>,

    /// Alternate reference dataset (TOML or JSON)
    pub reference_data: Option<PathBuf>,

    /// Defaults offered by the prompts and used by `--defaults`
    pub defaults: MountInput,
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit config file, which must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Config::from_toml(&content, path)?;

        // Dataset paths are relative to the config file
        if let (Some(data), Some(dir)) = (&config.reference_data, path.parent()) {
            if data.is_relative() {
                config.reference_data = Some(dir.join(data));
            }
        }
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, else `solarframe.toml` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Config::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Config::load(fallback)
                } else {
                    debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load and validate a reference dataset. `.json` files are read as JSON,
/// anything else as TOML.
pub fn load_reference_data(path: &Path) -> Result<ReferenceData, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reference_data(&content, path)
}

fn parse_reference_data(content: &str, path: &Path) -> Result<ReferenceData, ConfigError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let rejected = |source: CalcError| ConfigError::Reference {
        path: path.to_path_buf(),
        source,
    };

    let data = if is_json {
        ReferenceData::from_json(content).map_err(rejected)?
    } else {
        let data: ReferenceData = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        data.validate().map_err(rejected)?;
        data
    };
    info!(name = %data.name, cities = data.cities.names().len(), sections = data.sections.len(), "loaded reference data");
    Ok(data)
}
