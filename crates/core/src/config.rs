//! Startup configuration for the geometry engine.
//!
//! Values come from a TOML file; any field left out keeps its default. The
//! viewport radius can be overridden with `SIGHTLINE_VIEWPORT_RADIUS`.

use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const VIEWPORT_RADIUS_ENV: &str = "SIGHTLINE_VIEWPORT_RADIUS";

const DEFAULT_VIEWPORT_RADIUS: i32 = 12;
const DEFAULT_MAP_SIZE: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Maximum distance a viewer can see, in cells.
    pub viewport_radius: i32,
    /// Wing lengths whose sight-line tables are built at startup.
    pub prewarm_wing_lens: Vec<i32>,
    pub map_width: usize,
    pub map_height: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            viewport_radius: DEFAULT_VIEWPORT_RADIUS,
            prewarm_wing_lens: Vec::new(),
            map_width: DEFAULT_MAP_SIZE,
            map_height: DEFAULT_MAP_SIZE,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(message) => write!(f, "invalid config TOML: {message}"),
            Self::Invalid(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) | Self::Invalid(_) => None,
        }
    }
}

impl GeometryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` (or defaults when `None`) and applies the environment override.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let override_value = env::var(VIEWPORT_RADIUS_ENV).ok();
        config.apply_viewport_override(override_value.as_deref())?;
        Ok(config)
    }

    pub fn apply_viewport_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = raw else {
            return Ok(());
        };
        let radius = raw.trim().parse::<i32>().map_err(|e| {
            ConfigError::Invalid(format!("{VIEWPORT_RADIUS_ENV}={raw:?} is not an integer: {e}"))
        })?;
        if radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "{VIEWPORT_RADIUS_ENV} must be non-negative, got {radius}"
            )));
        }
        self.viewport_radius = radius;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport_radius must be non-negative, got {}",
                self.viewport_radius
            )));
        }
        if let Some(len) = self.prewarm_wing_lens.iter().find(|len| **len < 0) {
            return Err(ConfigError::Invalid(format!("wing length must be non-negative, got {len}")));
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "map must be non-empty, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        Ok(())
    }
}
