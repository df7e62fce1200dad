// Game configuration
//
// Every field has a default so a partial JSON file only overrides what it names.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "BULLET_QUEST_CONFIG";

/// Configuration file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "bullet_quest.json";

/// Window, timing and asset settings for the game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Initial window width in logical pixels
    pub window_width: u32,
    /// Initial window height in logical pixels
    pub window_height: u32,
    /// Whether the window can be resized
    pub resizable: bool,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// Logical canvas width used when no scene is active
    pub canvas_width: u32,
    /// Logical canvas height used when no scene is active
    pub canvas_height: u32,
    /// Root directory for all game assets
    pub asset_root: PathBuf,
    /// Background fill colour (RGBA)
    pub background: [u8; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Bullet Quest 2D".to_string(),
            window_width: 1280,
            window_height: 720,
            resizable: true,
            ticks_per_second: 60,
            canvas_width: 320,
            canvas_height: 128,
            asset_root: PathBuf::from("assets"),
            background: [120, 180, 255, 255],
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid game configuration")
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No configuration file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the file named by `BULLET_QUEST_CONFIG`, or the default file
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(path)
    }

    /// Fixed simulation timestep in seconds
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.ticks_per_second.max(1) as f64
    }
}
