//! Editor configuration parsed from environment variables.

use grid::consts::{DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH};
use grid::geometry::Rect;

const WIDTH_VAR: &str = "GRIDMAKER_CONTAINER_WIDTH";
const HEIGHT_VAR: &str = "GRIDMAKER_CONTAINER_HEIGHT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected a positive number of pixels)")]
    InvalidPixels { var: &'static str, value: String },
}

/// Preview container size used to map scripted pointer events onto the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    pub container_width: f64,
    pub container_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { container_width: DEFAULT_CONTAINER_WIDTH, container_height: DEFAULT_CONTAINER_HEIGHT }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `GRIDMAKER_CONTAINER_WIDTH`: default 800
    /// - `GRIDMAKER_CONTAINER_HEIGHT`: default 600
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            container_width: parse_pixels(WIDTH_VAR, lookup(WIDTH_VAR), DEFAULT_CONTAINER_WIDTH)?,
            container_height: parse_pixels(HEIGHT_VAR, lookup(HEIGHT_VAR), DEFAULT_CONTAINER_HEIGHT)?,
        })
    }

    /// The container rectangle, anchored at the origin.
    #[must_use]
    pub fn container(&self) -> Rect {
        Rect::new(0.0, 0.0, self.container_width, self.container_height)
    }
}

fn parse_pixels(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidPixels { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
