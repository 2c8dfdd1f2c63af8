//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/basecalc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Tracing filter directive used when `RUST_LOG` is unset (e.g. "debug").
    #[serde(default)]
    pub log_filter: Option<String>,

    /// REPL prompt.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Emit replies as JSON lines instead of text.
    #[serde(default)]
    pub json: Option<bool>,

    /// User the REPL acts as on startup.
    #[serde(default)]
    pub user: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub log_file_path: PathBuf,
    pub log_filter: String,
    pub prompt: String,
    pub json: bool,
    pub user: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            log_filter: "info".to_string(),
            prompt: "> ".to_string(),
            json: false,
            user: "local".to_string(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/basecalc/basecalc.log` on Linux; falls back to the
/// current directory when no state directory exists for the platform.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("basecalc").join("basecalc.log")
    } else {
        PathBuf::from("basecalc.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("basecalc").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BASECALC_CONFIG` environment variable
/// 3. Default path `~/.config/basecalc/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("BASECALC_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_filter: config.log_filter.unwrap_or(defaults.log_filter),
        prompt: config.prompt.unwrap_or(defaults.prompt),
        json: config.json.unwrap_or(defaults.json),
        user: config.user.unwrap_or(defaults.user),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `BASECALC_LOG_FILE` and `BASECALC_USER`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("BASECALC_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    if let Ok(user) = std::env::var("BASECALC_USER") {
        config.user = user;
    }

    config
}

/// CLI flags that override every other source when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub log_file_path: Option<PathBuf>,
    pub json: Option<bool>,
    pub user: Option<String>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(path) = overrides.log_file_path {
        config.log_file_path = path;
    }

    if let Some(json) = overrides.json {
        config.json = json;
    }

    if let Some(user) = overrides.user {
        config.user = user;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
