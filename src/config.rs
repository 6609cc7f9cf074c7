//! Game configuration.
//!
//! Every field defaults to the built-in constants, so an absent or partial
//! `snake.json` still yields a playable setup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Cell;

pub const CONFIG_FILE: &str = "snake.json";

pub const WINDOW_WIDTH: i32 = 1200;
pub const WINDOW_HEIGHT: i32 = 800;
pub const GRID_SIZE: i32 = 40;
pub const SNAKE_START_LENGTH: usize = 5;
pub const TICK_MILLIS: u64 = 100;
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
pub const FONT_FILE: &str = "/font.ttf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Pixel size of one grid cell.
    pub grid_size: i32,
    pub start_length: usize,
    pub tick_millis: u64,
    pub high_score_path: PathBuf,
    /// Font path inside the ggez resource directory.
    pub font_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            grid_size: GRID_SIZE,
            start_length: SNAKE_START_LENGTH,
            tick_millis: TICK_MILLIS,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            font_path: FONT_FILE.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Loads `path` if it exists. Any failure falls back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return GameConfig::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring {}: {}; using defaults", path.display(), e);
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::Invalid("grid_size must be positive".into()));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::Invalid("window dimensions must be positive".into()));
        }
        if self.window_width % self.grid_size != 0 || self.window_height % self.grid_size != 0 {
            return Err(ConfigError::Invalid(format!(
                "window {}x{} is not a multiple of grid_size {}",
                self.window_width, self.window_height, self.grid_size
            )));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::Invalid("tick_millis must be non-zero".into()));
        }
        // The starting snake extends left from the centre column.
        let room = (self.columns() / 2 + 1) as usize;
        if self.start_length == 0 || self.start_length > room {
            return Err(ConfigError::Invalid(format!(
                "start_length must be between 1 and {}",
                room
            )));
        }
        Ok(())
    }

    pub fn columns(&self) -> i32 {
        self.window_width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.window_height / self.grid_size
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Centre of the playfield, snapped to the grid.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.grid_size,
            self.rows() / 2 * self.grid_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.window_width && cell.y >= 0 && cell.y < self.window_height
    }
}
