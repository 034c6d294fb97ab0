//! Configuration file loading
//!
//! All settings are optional. Lookup order for the file:
//! 1. `--config <PATH>`
//! 2. `JJ_GUI_CONFIG` environment variable
//! 3. `~/.config/jj-gui/config.toml` (platform config directory)
//!
//! A missing file means defaults; a file that exists but does not parse is
//! an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::controller::host::SCREENSHOT_COMMAND;
use crate::jj::constants::JJ_COMMAND;
use crate::prefs::default_prefs_path;

/// Environment variable naming an alternate config file
pub const CONFIG_ENV_VAR: &str = "JJ_GUI_CONFIG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

/// `config.toml` contents
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// jj binary (name on PATH or absolute path)
    #[serde(default)]
    pub jj_command: Option<String>,

    /// Screenshot tool, invoked as `<cmd> -w -o <file>`
    #[serde(default)]
    pub screenshot_command: Option<String>,

    /// Directory screenshots are written to
    #[serde(default)]
    pub screenshot_dir: Option<PathBuf>,

    /// Preference store (last repository, column widths)
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,

    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Capture mouse events (row clicks, column dragging)
    #[serde(default)]
    pub mouse: Option<bool>,
}

/// Settings after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub jj_command: String,
    pub screenshot_command: String,
    pub screenshot_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub log_file_path: PathBuf,
    pub mouse: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            jj_command: JJ_COMMAND.to_string(),
            screenshot_command: SCREENSHOT_COMMAND.to_string(),
            screenshot_dir: std::env::temp_dir(),
            preferences_path: default_prefs_path(),
            log_file_path: default_log_path(),
            mouse: true,
        }
    }
}

impl ResolvedConfig {
    /// Overlay the values present in `file` onto the defaults
    pub fn from_file(file: Option<ConfigFile>) -> Self {
        let defaults = Self::default();
        let Some(file) = file else {
            return defaults;
        };

        Self {
            jj_command: file.jj_command.unwrap_or(defaults.jj_command),
            screenshot_command: file
                .screenshot_command
                .unwrap_or(defaults.screenshot_command),
            screenshot_dir: file.screenshot_dir.unwrap_or(defaults.screenshot_dir),
            preferences_path: file.preferences_path.unwrap_or(defaults.preferences_path),
            log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
            mouse: file.mouse.unwrap_or(defaults.mouse),
        }
    }
}

/// `~/.local/state/jj-gui/jj-gui.log`, or the working directory when the
/// platform has no state directory
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(dir) => dir.join("jj-gui").join("jj-gui.log"),
        None => PathBuf::from("jj-gui.log"),
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jj-gui").join("config.toml"))
}

/// Read and parse `path`; `Ok(None)` when the file does not exist
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Pick the config file location from the CLI flag and environment value
pub fn config_path(explicit: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    explicit
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load the config following the lookup order
pub fn load_config(explicit: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let file = match config_path(explicit, env_value) {
        Some(path) => load_config_file(&path)?,
        None => None,
    };
    Ok(ResolvedConfig::from_file(file))
}
