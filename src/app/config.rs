// Configuration management
//
// Loads the rain settings from `rainfall.toml`, falling back to the built-in
// defaults when the file is missing or invalid.

use std::{fs, io, path::PathBuf, time::Duration};

use log::LevelFilter;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rain::colors::{SUNLIGHT, brightens, gradient, parse_hex};

/// Default configuration file path
pub const CONFIG_FILE: &str = "rainfall.toml";

/// Largest accepted grid dimension
pub const MAX_DIMENSION: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rainfall.toml: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse rainfall.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Fixed RNG seed, random when absent
    pub seed: Option<u64>,

    pub grid: GridConfig,
    pub timing: TimingConfig,
    pub palette: PaletteConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,

    /// Length of a drop and of its gradient
    pub snake_length: usize,

    /// Per-column chance of a new drop on each tick (0.0-1.0)
    pub spawn_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Grid tick period in milliseconds
    pub tick_ms: u64,

    /// Palette change period in milliseconds
    pub color_cycle_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base colors as `#RRGGBB`
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub file: PathBuf,

    /// One of off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 20,
            snake_length: 5,
            spawn_chance: 0.05,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            color_cycle_ms: 5000,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: SUNLIGHT.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("rainfall.log"),
            level: String::from("info"),
        }
    }
}

impl RainConfig {
    /// Load the configuration file, or the defaults if it can't be used.
    ///
    /// The error is handed back so the caller can report it once logging is up.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                (Self::default(), None)
            }
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        for (field, value) in [
            ("grid.rows", grid.rows),
            ("grid.columns", grid.columns),
            ("grid.snake_length", grid.snake_length),
        ] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} is outside 1..={MAX_DIMENSION}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&grid.spawn_chance) {
            return Err(ConfigError::invalid(
                "grid.spawn_chance",
                format!("{} is outside 0.0..=1.0", grid.spawn_chance),
            ));
        }
        if self.timing.tick_ms == 0 {
            return Err(ConfigError::invalid("timing.tick_ms", "must be positive"));
        }
        if self.timing.color_cycle_ms == 0 {
            return Err(ConfigError::invalid(
                "timing.color_cycle_ms",
                "must be positive",
            ));
        }
        if self.timing.color_cycle_ms < self.timing.tick_ms {
            return Err(ConfigError::invalid(
                "timing.color_cycle_ms",
                format!(
                    "{} is shorter than timing.tick_ms ({})",
                    self.timing.color_cycle_ms, self.timing.tick_ms
                ),
            ));
        }
        if self.palette.colors.is_empty() {
            return Err(ConfigError::invalid("palette.colors", "is empty"));
        }
        if let Some(bad) = self
            .palette
            .colors
            .iter()
            .find(|code| parse_hex(code).is_none())
        {
            return Err(ConfigError::invalid(
                "palette.colors",
                format!("`{bad}` is not a #RRGGBB color"),
            ));
        }
        // every drop must get strictly brighter from its top to its bottom
        if let Some(code) = self.palette.colors.iter().find(|code| {
            parse_hex(code).is_some_and(|base| !brightens(&gradient(grid.snake_length, base)))
        }) {
            return Err(ConfigError::invalid(
                "palette.colors",
                format!(
                    "`{code}` is too dark for {} distinct shades",
                    grid.snake_length
                ),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn palette(&self) -> Vec<Color> {
        self.palette
            .colors
            .iter()
            .filter_map(|code| parse_hex(code))
            .collect()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.timing.tick_ms)
    }

    pub fn color_cycle_period(&self) -> Duration {
        Duration::from_millis(self.timing.color_cycle_ms)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log.level.parse().map_err(|_| {
            ConfigError::invalid("log.level", format!("unknown level `{}`", self.log.level))
        })
    }
}
