//! Core configuration.
//!
//! # Responsibility
//! - Describe host-tunable knobs (log level, feature flags, drawing limits).
//! - Load them from a JSON document with per-field defaults.
//!
//! # Invariants
//! - Missing fields fall back to defaults; unknown fields are rejected.
//! - `log_level` is validated with the same rules as `init_logging`.

use crate::context::FeatureFlags;
use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors from config loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Document is not valid config JSON.
    Parse(serde_json::Error),
    /// A field parsed but carries an unsupported value.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config document: {err}"),
            Self::Invalid(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Limits applied to freehand capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawingConfig {
    /// Upper bound on points in one in-progress stroke. `None` = unbounded.
    pub max_points_per_stroke: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub log_level: String,
    pub feature_flags: FeatureFlags,
    pub drawing: DrawingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            feature_flags: FeatureFlags::default(),
            drawing: DrawingConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.log_level = normalize_level(&config.log_level)
            .map_err(ConfigError::Invalid)?
            .to_string();
        if config.drawing.max_points_per_stroke == Some(0) {
            return Err(ConfigError::Invalid(
                "drawing.max_points_per_stroke must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
