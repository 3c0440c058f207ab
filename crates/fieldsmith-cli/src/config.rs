//! Configuration management for the CLI
//!
//! Configuration is merged from, lowest precedence first:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables
//! - Command-line arguments
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use fieldsmith_core::ValidationMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Validation mode used when neither `--mode` nor `FIELDSMITH_MODE` is set
    pub mode: Option<ValidationMode>,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,

    /// Print permissive-mode warnings after a command
    pub show_warnings: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_warnings: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Default configuration file paths, checked in order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".fieldsmith.yaml"),
            PathBuf::from(".fieldsmith.yml"),
            PathBuf::from(".fieldsmith.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join("fieldsmith");
            paths.push(dir.join("config.yaml"));
            paths.push(dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".fieldsmith.yaml"));
            paths.push(home_dir.join(".fieldsmith.json"));
        }

        paths
    }

    /// Effective validation mode: flag, then `FIELDSMITH_MODE`, then the
    /// config file, then strict
    pub fn resolve_mode(&self, flag: Option<ValidationMode>) -> ValidationMode {
        self.resolve_mode_with(flag, ValidationMode::env_override())
    }

    fn resolve_mode_with(
        &self,
        flag: Option<ValidationMode>,
        env: Option<ValidationMode>,
    ) -> ValidationMode {
        flag.or(env).or(self.mode).unwrap_or_default()
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}
