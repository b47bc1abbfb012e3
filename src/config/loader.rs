//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.calculator.toml` in the working directory
//! 4. `~/.config/calculator/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants;
use crate::env::Env;
use crate::models::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "invalid precision {value} in config file {path} (maximum is {max})",
        max = constants::MAX_PRECISION
    )]
    InvalidPrecision { path: PathBuf, value: u8 },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed number of decimals for results; shortest form when unset.
    pub precision: Option<u8>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from the global config, then `.calculator.toml` in `work_dir`,
    /// then applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), work_dir, env)
    }

    /// Layered load with an explicit global config path.
    pub fn load_layers(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(value) = config.output.precision {
            if value > constants::MAX_PRECISION {
                return Err(ConfigError::InvalidPrecision {
                    path: path.to_path_buf(),
                    value,
                });
            }
        }
        Ok(config)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_output = OutputConfig::default();
        if other.output.format != default_output.format {
            self.output.format = other.output.format;
        }
        if other.output.precision.is_some() {
            self.output.precision = other.output.precision;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_FORMAT),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_PRECISION) {
            match val.trim().parse::<u8>() {
                Ok(precision) if precision <= constants::MAX_PRECISION => {
                    self.output.precision = Some(precision)
                }
                _ => warn!("ignoring invalid {} value: {val}", constants::ENV_PRECISION),
            }
        }
    }

    /// Apply CLI flag overrides (highest priority).
    pub fn apply_overrides(&mut self, format: Option<OutputFormat>, precision: Option<u8>) {
        if let Some(format) = format {
            self.output.format = format;
        }
        if precision.is_some() {
            self.output.precision = precision;
        }
    }
}
