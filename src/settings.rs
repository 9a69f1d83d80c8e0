//! Game settings with persistence
//!
//! Settings are saved to `~/.config/emberfall/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use emberfall_game::StartingStats;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const SETTINGS_FILE: &str = "settings.toml";

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player: PlayerSettings,
    pub files: FileSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("emberfall"))
    }

    /// Load settings from disk, writing the defaults on first run
    pub fn load() -> Self {
        let Some(dir) = Self::config_dir() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_or_create(&dir)
    }

    /// Load `settings.toml` from `dir`, or write the defaults there if it is missing
    pub fn load_or_create(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        if path.exists() {
            return Self::load_from(&path);
        }

        let settings = Self::default();
        if let Err(e) = settings.save_to(dir) {
            warn!("Failed to write default settings: {}", e);
        }
        settings
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Write `settings.toml` into `dir`
    pub fn save_to(&self, dir: &Path) -> anyhow::Result<()> {
        let path = dir.join(SETTINGS_FILE);

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// New-character settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Starting (and maximum) health
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Hand out the sword and potion at the start of a game
    pub starter_items: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        let stats = StartingStats::default();
        Self {
            health: stats.health,
            attack: stats.attack,
            defense: stats.defense,
            starter_items: true,
        }
    }
}

impl PlayerSettings {
    pub fn starting_stats(&self) -> StartingStats {
        StartingStats {
            health: self.health,
            attack: self.attack,
            defense: self.defense,
        }
    }
}

/// Where saves and the event log go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Save used when the player does not name one
    pub save_name: String,
    /// Event log file name, or an absolute path
    pub event_log: String,
    /// Overrides the default save directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            save_name: "savegame.txt".to_string(),
            event_log: "game_log.txt".to_string(),
            save_dir: None,
        }
    }
}
