use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GittableError, Result};

/// File name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gittable.toml";

/// Represents the complete configuration for gittable.
///
/// Contains the build tool executables, the environment variables to hide from
/// subprocesses, and the git backend used for tagging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_hatch() -> String {
    "hatch".to_string()
}

fn default_poetry() -> String {
    "poetry".to_string()
}

/// Executables used to determine a project's version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_hatch")]
    pub hatch: String,

    #[serde(default = "default_poetry")]
    pub poetry: String,

    /// Python interpreter used for the pip fallback. Looked up on `PATH`
    /// when unset.
    #[serde(default)]
    pub python: Option<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            hatch: default_hatch(),
            poetry: default_poetry(),
            python: None,
        }
    }
}

/// Environment handed to subprocesses.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EnvironmentConfig {
    /// Names removed in addition to `PIP_CONSTRAINT`, which is always removed
    #[serde(default)]
    pub strip: Vec<String>,
}

/// How tags are listed and created.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn the `git` executable
    #[default]
    Cli,
    /// Use libgit2 in-process
    Libgit2,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: GitBackend,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittable.toml` in current directory
/// 3. `gittable.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(path);
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return read_config(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(CONFIG_FILE_NAME);
        if user_config.exists() {
            return read_config(&user_config);
        }
    }

    Ok(Config::default())
}

/// Parses configuration from a TOML string.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| GittableError::config(e.to_string()))
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GittableError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&config_str)
        .map_err(|e| GittableError::config(format!("{}: {}", path.display(), e)))
}
