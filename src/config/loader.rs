//! Configuration file loading with precedence handling.

use crate::layout::GridLayoutEngine;
use crate::model::{Insets, LaneCount, Orientation, Size};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LANEGRID_CONFIG";
/// Environment variable overriding the lane count.
pub const LANES_ENV: &str = "LANEGRID_LANES";
/// Environment variable overriding the orientation.
pub const ORIENTATION_ENV: &str = "LANEGRID_ORIENTATION";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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

    /// A setting is well-formed but out of range.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Setting name as it appears in the config file.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/lanegrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of lanes.
    #[serde(default)]
    pub lane_count: Option<usize>,

    /// Scroll axis ("vertical" or "horizontal").
    #[serde(default)]
    pub orientation: Option<Orientation>,

    /// Container width in layout units.
    #[serde(default)]
    pub width: Option<i32>,

    /// Container height in layout units.
    #[serde(default)]
    pub height: Option<i32>,

    /// Container padding.
    #[serde(default)]
    pub padding: Option<Insets>,

    /// Layout units per terminal cell in the preview.
    #[serde(default)]
    pub cell_scale: Option<i32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Lane count.
    pub lane_count: LaneCount,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Container width.
    pub width: i32,
    /// Container height.
    pub height: i32,
    /// Container padding.
    pub padding: Insets,
    /// Preview scale.
    pub cell_scale: i32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            lane_count: LaneCount::DEFAULT,
            orientation: Orientation::Vertical,
            width: 600,
            height: 400,
            padding: Insets::default(),
            cell_scale: 10,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Builds an engine configured with this container geometry.
    pub fn to_engine(&self) -> GridLayoutEngine {
        let mut engine = GridLayoutEngine::with_lane_count(self.lane_count, self.orientation);
        engine.set_container_size(Size::new(self.width, self.height));
        engine.set_padding(self.padding);
        engine
    }
}

/// CLI flags that override every other configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--lanes`
    pub lane_count: Option<usize>,
    /// `--orientation`
    pub orientation: Option<Orientation>,
    /// `--width`
    pub width: Option<i32>,
    /// `--height`
    pub height: Option<i32>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/lanegrid/lanegrid.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("lanegrid").join("lanegrid.log")
    } else {
        PathBuf::from("lanegrid.log")
    }
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

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/lanegrid/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lanegrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `LANEGRID_CONFIG` environment variable
/// 3. Default path `~/.config/lanegrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a zero lane count, negative
/// container size, or a cell scale below 1.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let lane_count = match config.lane_count {
        Some(count) => parse_lane_count(count)?,
        None => defaults.lane_count,
    };

    let resolved = ResolvedConfig {
        lane_count,
        orientation: config.orientation.unwrap_or(defaults.orientation),
        width: config.width.unwrap_or(defaults.width),
        height: config.height.unwrap_or(defaults.height),
        padding: config.padding.unwrap_or(defaults.padding),
        cell_scale: config.cell_scale.unwrap_or(defaults.cell_scale),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    };
    validate(resolved)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LANEGRID_LANES`: Override lane count
/// - `LANEGRID_ORIENTATION`: Override orientation
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a variable is set to an unparseable value.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(LANES_ENV) {
        let count = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "lane_count",
                reason: format!("{LANES_ENV}={raw:?}: {e}"),
            })?;
        config.lane_count = parse_lane_count(count)?;
    }

    if let Ok(raw) = std::env::var(ORIENTATION_ENV) {
        config.orientation = raw.parse().map_err(|e: crate::model::InvalidOrientation| {
            ConfigError::InvalidValue {
                key: "orientation",
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if an override is out of range.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(count) = overrides.lane_count {
        config.lane_count = parse_lane_count(count)?;
    }
    if let Some(orientation) = overrides.orientation {
        config.orientation = orientation;
    }
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }

    validate(config)
}

fn parse_lane_count(count: usize) -> Result<LaneCount, ConfigError> {
    LaneCount::new(count).map_err(|e| ConfigError::InvalidValue {
        key: "lane_count",
        reason: e.to_string(),
    })
}

fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.width < 0 {
        return Err(ConfigError::InvalidValue {
            key: "width",
            reason: format!("must be >= 0 (got {})", config.width),
        });
    }
    if config.height < 0 {
        return Err(ConfigError::InvalidValue {
            key: "height",
            reason: format!("must be >= 0 (got {})", config.height),
        });
    }
    if config.cell_scale < 1 {
        return Err(ConfigError::InvalidValue {
            key: "cell_scale",
            reason: format!("must be >= 1 (got {})", config.cell_scale),
        });
    }
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
