//! Shell configuration.
//!
//! Platforms may provide a `ShellConfig` through Dioxus context before
//! rendering `CatalogApp`; otherwise the defaults below apply.

use serde::Deserialize;
use thiserror::Error;

/// Portion of the screen the catalog list keeps once a destination other than
/// root is open on an expanded screen.
pub const CATALOG_LIST_MIN_WIDTH_FRACTION: f32 = 0.3;

/// Duration of the list width animation.
pub const CATALOG_LIST_WIDTH_ANIMATION_DURATION_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub list_min_width_fraction: f32,
    pub list_width_animation_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            list_min_width_fraction: CATALOG_LIST_MIN_WIDTH_FRACTION,
            list_width_animation_ms: CATALOG_LIST_WIDTH_ANIMATION_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("list minimum width fraction must be within (0, 1], got {0}")]
    InvalidListFraction(f32),
    #[error("list width animation must last at least 1 ms")]
    InvalidAnimationDuration,
}

impl ShellConfig {
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.list_min_width_fraction > 0.0 && self.list_min_width_fraction <= 1.0) {
            return Err(ConfigError::InvalidListFraction(self.list_min_width_fraction));
        }
        if self.list_width_animation_ms == 0 {
            return Err(ConfigError::InvalidAnimationDuration);
        }
        Ok(self)
    }

    /// Parse a JSON document, keeping defaults for missing fields.
    pub fn from_json(raw: &str) -> Result<Self, ShellConfigLoadError> {
        let config: ShellConfig = serde_json::from_str(raw)?;
        Ok(config.validated()?)
    }
}

#[derive(Debug, Error)]
pub enum ShellConfigLoadError {
    #[error("malformed shell configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
