//! octconf configuration
//!
//! Optional user-level configuration with merge semantics.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high -> low):
//! 1. CLI arguments
//! 2. Explicit --config file, or user-level (~/.config/octconf/config.toml)
//! 3. Default values
//! ```
//!
//! # File format
//!
//! ```toml
//! [log]
//! level = "warn"
//!
//! [eval]
//! max_depth = 256
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::logger::LogLevel;

/// Default nesting limit for arrays and reference chains
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// User-level configuration for octconf
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct UserConfig {
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Parser and evaluator settings
    #[serde(default)]
    pub eval: EvalConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Evaluation configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvalConfig {
    /// Maximum nesting depth of arrays and reference chains
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("octconf"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("octconf"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("octconf"));
    }

    None
}

/// Get the user config file path (~/.config/octconf/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit path; the file must exist
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(toml::from_str(&content)?)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
