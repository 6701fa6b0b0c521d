//! Runtime settings. Defaults reproduce the classic look: a fullscreen board of
//! 30px cells, white snake on black, advancing every 50ms.

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an optional JSON settings file.
pub const CONFIG_ENV: &str = "WSNAKE_CONFIG";

pub const WINDOW_TITLE: &str = "Wsnake";

pub type Rgba = [u8; 4];

/// Where food is allowed to appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPolicy {
    /// Any cell of the board, including ones the snake occupies.
    #[default]
    Uniform,
    /// Only cells not covered by the snake.
    AvoidSnake,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub grid: Rgba,
    pub snake: Rgba,
    pub food: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            grid: [15, 15, 15, 255],
            snake: [255, 255, 255, 255],
            food: [255, 255, 255, 255],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window size used when not fullscreen.
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    /// Side of one grid cell, in physical pixels.
    pub cell_size: u32,
    /// Delay between two simulation ticks.
    pub tick_ms: u64,
    /// Fixed seed for food placement; drawn at random when absent.
    pub seed: Option<u64>,
    pub food_policy: FoodPolicy,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 600,
            fullscreen: true,
            cell_size: 30,
            tick_ms: 50,
            seed: None,
            food_policy: FoodPolicy::default(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Reads the file named by `WSNAKE_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                log::debug!("{CONFIG_ENV} not set, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| SetupError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(SetupError::InvalidConfig("cell_size must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(SetupError::InvalidConfig("tick_ms must be positive"));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SetupError::InvalidConfig("window size must be positive"));
        }
        Ok(())
    }

    pub fn tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.food_policy, FoodPolicy::Uniform);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "cell_size": 20, "food_policy": "avoid_snake" }"#).unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.food_policy, FoodPolicy::AvoidSnake);
        assert_eq!(config.window_width, 900);
        assert!(config.fullscreen);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_file("/nonexistent/wsnake.json").unwrap_err();
        assert!(matches!(err, SetupError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/wsnake.json"));
    }
}
