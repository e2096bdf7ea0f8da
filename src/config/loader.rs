//! Configuration structures and loading logic.

use crate::error::{Error, Result, DEFAULT_ERROR_CODE};
use crate::fs::CasingPolicy;
use crate::ops::DEFAULT_DIR_MODE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub reporting: ReportingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied when a call does not say otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Mode for directories created by any operation.
    #[serde(default = "default_dir_mode")]
    pub dir_mode: u32,

    /// Casing policy used when the CLI gives none.
    #[serde(default)]
    pub policy: CasingPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
            policy: CasingPolicy::default(),
        }
    }
}

/// Error reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Code handed to the error sink with every report.
    #[serde(default = "default_error_code")]
    pub error_code: u16,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            error_code: DEFAULT_ERROR_CODE,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when neither RUST_LOG nor --debug is set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_dir_mode() -> u32 {
    DEFAULT_DIR_MODE
}

fn default_error_code() -> u16 {
    DEFAULT_ERROR_CODE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Per-user configuration file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fsutil").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, the per-user file is used when
    /// present, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using configuration {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
