//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level CLI configuration combining output and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Where and how the workspace file is written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the workspace JSON file.
    #[serde(default = "OutputConfig::default_path")]
    path: String,

    /// Whether to pretty-print the JSON output.
    #[serde(default = "OutputConfig::default_pretty")]
    pretty: bool,
}

impl OutputConfig {
    fn default_path() -> String {
        "workspace.json".to_string()
    }

    fn default_pretty() -> bool {
        true
    }

    /// Returns the configured output path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether the JSON output is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            pretty: Self::default_pretty(),
        }
    }
}

/// Style overrides applied to the generated workspace.
///
/// Values are CSS color strings; they are validated when the workspace is
/// built, not when the configuration is loaded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background color for the person element style.
    #[serde(default)]
    person_background: Option<String>,

    /// Background color for the software system element style.
    #[serde(default)]
    system_background: Option<String>,
}

impl StyleConfig {
    /// Returns the configured person background color, if any.
    pub fn person_background(&self) -> Option<&str> {
        self.person_background.as_deref()
    }

    /// Returns the configured software system background color, if any.
    pub fn system_background(&self) -> Option<&str> {
        self.system_background.as_deref()
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (maquette/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("maquette/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("rs", "maquette", "maquette") {
        let config_dir = proj_dirs.config_dir();
        let system_config = config_dir.join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_are_missing() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.output().path(), "workspace.json");
        assert!(config.output().pretty());
        assert_eq!(config.style().person_background(), None);
    }

    #[test]
    fn sections_override_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [output]
            path = "docker/volume/workspace.json"
            pretty = false

            [style]
            person_background = "#333333"
            "##,
        )
        .unwrap();

        assert_eq!(config.output().path(), "docker/volume/workspace.json");
        assert!(!config.output().pretty());
        assert_eq!(config.style().person_background(), Some("#333333"));
        assert_eq!(config.style().system_background(), None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some("/does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }
}
